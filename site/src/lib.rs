//! # aesthetic-site
//!
//! Single-page marketing site built with [Leptos](https://leptos.dev/).
//!
//! The page is a header with tab navigation, one of four content panels
//! (home, features, pricing, about) and a footer. All behavior comes from
//! two pieces of UI state, see [`state::SiteState`].
//!
//! The same components run two ways:
//!
//! - **CSR** (`csr` feature): compiled to WASM and mounted to `<body>`
//!   by the `aesthetic-site` binary, with clicks driving reactive signals.
//! - **SSR** (`ssr` feature, default): rendered to a static HTML string for
//!   a fixed state by [`render_page`], which backs the tests and the
//!   `aesthetic-export` snapshot tool.
//!
//! ```rust
//! use aesthetic_site::{render_page, config::SiteConfig, state::{SiteState, Tab}};
//!
//! let html = render_page(&SiteState::with_tab(Tab::Pricing), &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"data-panel="pricing""#));
//! ```

pub mod components;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
#[cfg(feature = "ssr")]
pub mod export;
pub mod state;
pub mod styles;

#[cfg(feature = "ssr")]
use components::SiteDocument;
#[cfg(feature = "ssr")]
use config::SiteConfig;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::reactive::owner::Owner;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use state::SiteState;

pub use error::{SiteError, SiteResult};

/// Render the complete page for one UI state.
///
/// This is a pure function of `(active_tab, menu_open)` plus the config
/// strings: exactly one content panel is present, and the mobile panel is
/// present iff `state.menu_open`.
#[cfg(feature = "ssr")]
pub fn render_page(state: &SiteState, config: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <SiteDocument state=*state config=config.clone() /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::controller::NavController;
    use crate::state::{NavSource, Tab};
    use pretty_assertions::assert_eq;

    const MOBILE_PANEL: &str = r#"data-role="mobile-panel""#;

    fn render(state: SiteState) -> String {
        render_page(&state, &SiteConfig::default())
    }

    fn rendered_panels(html: &str) -> Vec<Tab> {
        Tab::ALL
            .into_iter()
            .filter(|tab| html.contains(&format!(r#"data-panel="{}""#, tab.slug())))
            .collect()
    }

    fn current_marker(tab: Tab) -> String {
        format!(r#"data-tab="{}" aria-current="page""#, tab.slug())
    }

    #[test]
    fn initial_render_is_home_with_menu_closed() {
        let html = render(SiteState::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(rendered_panels(&html), vec![Tab::Home]);
        assert!(!html.contains(MOBILE_PANEL));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("Beautiful design for"));
    }

    #[test]
    fn each_tab_renders_only_its_panel() {
        for tab in Tab::ALL {
            let html = render(SiteState::with_tab(tab));
            assert_eq!(rendered_panels(&html), vec![tab], "tab {tab}");
            assert_eq!(html.matches("data-panel=").count(), 1, "tab {tab}");
            assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
            assert!(html.contains(&current_marker(tab)));
        }
    }

    #[test]
    fn mobile_panel_present_iff_menu_open() {
        for tab in Tab::ALL {
            for menu_open in [false, true] {
                let html = render(SiteState {
                    active_tab: tab,
                    menu_open,
                });
                assert_eq!(html.contains(MOBILE_PANEL), menu_open, "tab {tab}");
                assert_eq!(rendered_panels(&html), vec![tab]);
            }
        }
    }

    #[test]
    fn open_menu_marks_active_link_in_both_lists() {
        let html = render(SiteState {
            active_tab: Tab::Features,
            menu_open: true,
        });
        assert_eq!(html.matches(&current_marker(Tab::Features)).count(), 2);
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("Your Profile"));
        assert!(html.contains("user@example.com"));
    }

    #[test]
    fn panel_content_matches_tab() {
        let features = render(SiteState::with_tab(Tab::Features));
        assert!(features.contains("Everything you need to succeed online"));
        assert!(features.contains("Social Media Integration"));

        let pricing = render(SiteState::with_tab(Tab::Pricing));
        for name in ["Starter", "Professional", "Enterprise"] {
            assert!(pricing.contains(&format!(r#"data-plan="{name}""#)));
        }
        assert_eq!(pricing.matches("Start your trial").count(), 1);
        assert!(pricing.contains("$49"));

        let about = render(SiteState::with_tab(Tab::About));
        assert!(about.contains("Our Story"));
        assert!(about.contains("Jane Cooper"));
        assert!(about.contains("Head of Development"));
    }

    #[test]
    fn footer_and_brand_use_config() {
        let config = SiteConfig {
            brand_name: "Northwind".into(),
            copyright: "Northwind Ltd".into(),
            ..SiteConfig::default()
        };
        let html = render_page(&SiteState::default(), &config);
        assert!(html.contains("<title>Northwind</title>"));
        assert!(html.contains("Northwind Ltd"));
        assert!(html.contains("Contact"));
        assert!(html.contains("GitHub"));
    }

    #[test]
    fn controller_transitions_drive_rendering() {
        let owner = Owner::new();
        let state = owner.with(|| {
            let nav = NavController::default();
            nav.toggle_menu();
            nav.select_tab(Tab::About, NavSource::Mobile);
            nav.snapshot()
        });

        let html = render(state);
        assert_eq!(rendered_panels(&html), vec![Tab::About]);
        assert!(!html.contains(MOBILE_PANEL));
    }
}
