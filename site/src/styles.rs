//! CSS for the site.
//!
//! Embedded into the page by [`crate::components::SiteDocument`] for
//! snapshots and mounted next to the app in the browser build. Layout
//! switches to the desktop header at 768px; below that the menu toggle and
//! mobile panel take over.

/// Complete stylesheet. Indigo accent on a light gray canvas.
pub const SITE_CSS: &str = r#"
:root {
  --accent: #4f46e5;
  --accent-strong: #4338ca;
  --accent-soft: #e0e7ff;
  --accent-faint: #eef2ff;
  --text: #111827;
  --text-muted: #6b7280;
  --text-faint: #9ca3af;
  --canvas: #f9fafb;
  --surface: #ffffff;
  --border: #e5e7eb;
  --footer: #1f2937;
  --ok: #22c55e;
  --radius: 6px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: Inter, system-ui, -apple-system, "Segoe UI", sans-serif;
  color: var(--text);
  background: var(--canvas);
}

a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; }

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

.site { min-height: 100vh; display: flex; flex-direction: column; }
.site-main { flex: 1 0 auto; }
.container { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }

/* Header */
.site-header { background: var(--surface); box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.header-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.header-left { display: flex; align-items: center; height: 100%; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: var(--radius);
  background: var(--accent);
  color: #fff;
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}
.brand-name { font-size: 1.25rem; font-weight: 600; color: #1f2937; }

.desktop-nav { display: none; height: 100%; margin-left: 2rem; gap: 2rem; }
.nav-link {
  display: inline-flex;
  align-items: center;
  padding: 0 0.25rem;
  border-bottom: 2px solid transparent;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-muted);
}
.nav-link:hover { color: #374151; border-bottom-color: #d1d5db; }
.nav-link.active { color: var(--text); border-bottom-color: var(--accent); }

.header-actions { display: none; align-items: center; gap: 0.75rem; }
.icon-btn {
  border: 0;
  background: none;
  padding: 0.25rem;
  border-radius: 9999px;
  color: var(--text-faint);
}
.icon-btn:hover { color: var(--text-muted); }
.avatar-btn { border: 0; background: #f3f4f6; border-radius: 9999px; padding: 0; }
.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--accent-soft);
  color: var(--accent);
  flex-shrink: 0;
}
.avatar-sm { width: 2rem; height: 2rem; }
.avatar-md { width: 2.5rem; height: 2.5rem; }
.avatar-lg { width: 3rem; height: 3rem; }

.menu-toggle {
  display: inline-flex;
  padding: 0.5rem;
  border: 0;
  border-radius: var(--radius);
  background: none;
  color: var(--text-faint);
}
.menu-toggle:hover { background: #f3f4f6; color: var(--text-muted); }

/* Mobile panel */
.mobile-links { padding: 0.5rem 0 0.75rem; }
.mobile-link {
  display: block;
  padding: 0.5rem 1rem 0.5rem 0.75rem;
  border-left: 4px solid transparent;
  font-weight: 500;
  color: #4b5563;
}
.mobile-link:hover { background: var(--canvas); border-left-color: #d1d5db; }
.mobile-link.active {
  border-left-color: var(--accent);
  color: var(--accent-strong);
  background: var(--accent-faint);
}
.mobile-account { padding: 1rem 0 0.75rem; border-top: 1px solid var(--border); }
.mobile-account-row { display: flex; align-items: center; gap: 0.75rem; padding: 0 1rem; }
.mobile-account-name { font-weight: 500; color: #1f2937; }
.mobile-account-email { font-size: 0.875rem; color: var(--text-muted); }
.mobile-account-bell { margin-left: auto; }
.mobile-account-links { margin-top: 0.75rem; }
.mobile-account-link { display: block; padding: 0.5rem 1rem; font-weight: 500; color: var(--text-muted); }
.mobile-account-link:hover { background: #f3f4f6; color: #1f2937; }

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem 1rem;
  border: 1px solid transparent;
  border-radius: var(--radius);
  font-size: 0.875rem;
  font-weight: 500;
}
.btn-lg { padding: 0.75rem 2rem; font-size: 1rem; }
.btn-block { display: block; width: 100%; text-align: center; margin-top: 2rem; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: var(--accent-strong); }
.btn-soft { background: var(--accent-soft); color: var(--accent-strong); }
.btn-dark { background: #1f2937; color: #fff; }
.btn-dark:hover { background: var(--text); }
.btn-inverse { background: #fff; color: var(--accent); margin-top: 2rem; }
.btn-inverse:hover { background: var(--accent-faint); }

/* Panels */
.panel { padding: 3rem 0; }
.panel-home { padding: 0; }
.panel-pricing { background: #f3f4f6; }
.panel-about, .panel-features { background: var(--surface); }

.section-header { max-width: 48rem; }
.section-header.centered { margin: 0 auto; text-align: center; }
.section-eyebrow {
  margin: 0;
  font-size: 1rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--accent);
}
.section-title { margin: 0.5rem 0 0; font-size: 1.875rem; font-weight: 800; letter-spacing: -0.02em; }
.section-description { margin: 1rem auto 0; font-size: 1.25rem; color: var(--text-muted); }

/* Home */
.hero { display: grid; background: var(--surface); }
.hero-copy { padding: 2.5rem 1rem 2rem; }
.hero-title { margin: 0; font-size: 2.25rem; font-weight: 800; letter-spacing: -0.02em; }
.hero-title-line { display: block; }
.hero-title-accent { display: block; color: var(--accent); }
.hero-subtitle { margin-top: 1.25rem; font-size: 1.125rem; color: var(--text-muted); max-width: 36rem; }
.hero-actions { margin-top: 2rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
.hero-preview {
  min-height: 14rem;
  background: var(--accent-soft);
  display: flex;
  align-items: center;
  justify-content: center;
}
.preview-card {
  width: 100%;
  max-width: 28rem;
  padding: 1.5rem;
  background: var(--surface);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.preview-image { height: 10rem; background: var(--border); border-radius: var(--radius); margin-bottom: 1rem; }
.preview-line { height: 1rem; background: var(--border); border-radius: 4px; margin-bottom: 0.5rem; }
.preview-line-long { width: 75%; }
.preview-line-short { width: 50%; margin-bottom: 1rem; }
.preview-button { height: 2.5rem; background: #6366f1; border-radius: var(--radius); }

.highlights { padding: 3rem 0; background: var(--surface); }
.feature-grid { margin-top: 2.5rem; display: grid; gap: 2.5rem; }
.feature-grid-wide { margin-top: 5rem; gap: 4rem; }
.feature-card { display: flex; gap: 1rem; }
.feature-badge {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  border-radius: var(--radius);
  background: #6366f1;
  color: #fff;
  display: flex;
  align-items: center;
  justify-content: center;
}
.feature-title { margin: 0; font-size: 1.125rem; font-weight: 500; }
.feature-description { margin: 0.5rem 0 0; color: var(--text-muted); }

.cta-band { background: var(--accent-strong); }
.cta-inner { max-width: 42rem; margin: 0 auto; padding: 4rem 1rem; text-align: center; }
.cta-title { margin: 0; font-size: 1.875rem; font-weight: 800; color: #fff; }
.cta-title-line { display: block; }
.cta-text { margin-top: 1rem; font-size: 1.125rem; color: var(--accent-soft); }

/* Pricing */
.pricing-grid { margin-top: 3rem; display: grid; gap: 1.5rem; }
.plan-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.plan-card.featured { box-shadow: 0 0 0 2px var(--accent); }
.plan-head { padding: 1.5rem; border-bottom: 1px solid var(--border); }
.plan-name { margin: 0; font-size: 1.125rem; font-weight: 500; }
.plan-description { margin-top: 1rem; font-size: 0.875rem; color: var(--text-muted); }
.plan-price { margin-top: 2rem; }
.plan-amount { font-size: 2.25rem; font-weight: 800; }
.plan-period { font-weight: 500; color: var(--text-muted); }
.plan-body { padding: 1.5rem 1.5rem 2rem; }
.plan-includes { margin: 0; font-size: 0.875rem; font-weight: 500; }
.plan-features { list-style: none; margin: 1.5rem 0 0; padding: 0; display: grid; gap: 1rem; }
.plan-feature { display: flex; gap: 0.75rem; font-size: 0.875rem; color: var(--text-muted); }
.plan-check { color: var(--ok); flex-shrink: 0; }

/* About */
.prose { max-width: 65ch; margin: 2.5rem auto 0; font-size: 1.125rem; color: var(--text-muted); line-height: 1.75; }
.prose blockquote { margin: 1.5rem 0; padding-left: 1rem; border-left: 4px solid var(--accent-soft); font-style: italic; color: var(--text); }
.prose h3 { color: var(--text); }
.team-grid { margin-top: 2.5rem; display: grid; gap: 2rem; }
.team-card { background: var(--surface); border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 1.25rem 1.5rem; }
.team-card-head { display: flex; align-items: center; gap: 1rem; }
.team-name { margin: 0; font-size: 1.125rem; font-weight: 500; }
.team-role { margin: 0; font-size: 0.875rem; color: var(--accent); }
.team-bio { margin-top: 1rem; font-size: 0.875rem; color: var(--text-muted); }

/* Footer */
.site-footer { background: var(--footer); }
.footer-inner { max-width: 80rem; margin: 0 auto; padding: 3rem 1rem; }
.footer-links { display: flex; flex-wrap: wrap; justify-content: center; }
.footer-link-item { padding: 0.5rem 1.25rem; }
.footer-link { color: #d1d5db; }
.footer-link:hover { color: #fff; }
.footer-social { margin-top: 2rem; display: flex; justify-content: center; gap: 1.5rem; }
.social-link { color: var(--text-faint); }
.social-link:hover { color: #d1d5db; }
.social-icon { width: 1.5rem; height: 1.5rem; }
.footer-copyright { margin-top: 2rem; text-align: center; color: var(--text-faint); }

@media (min-width: 640px) {
  .pricing-grid { grid-template-columns: repeat(3, 1fr); }
  .team-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
  .desktop-nav { display: flex; }
  .header-actions { display: flex; }
  .menu-toggle-wrap { display: none; }
  .mobile-panel { display: none; }
  .feature-grid { grid-template-columns: repeat(2, 1fr); }
  .hero-title { font-size: 3.75rem; }
}

@media (min-width: 1024px) {
  .hero { grid-template-columns: 1fr 1fr; }
  .hero-copy { padding: 5rem 2rem; }
  .hero-preview { min-height: 100%; }
  .team-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
