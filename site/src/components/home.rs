//! Home panel: hero, highlight list and call-to-action band.

use leptos::prelude::*;

use super::{FeatureCard, ICON_LIGHTNING};
use crate::content::HOME_HIGHLIGHTS;

#[component]
pub fn HomePanel() -> impl IntoView {
    view! {
        <section class="panel panel-home" data-panel="home">
            <Hero />
            <div class="highlights">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-eyebrow">"Features"</h2>
                        <p class="section-title">"A better way to showcase your work"</p>
                        <p class="section-description">
                            "Our platform combines traditional design elements with modern functionality to create "
                            "websites that are both beautiful and effective."
                        </p>
                    </div>
                    <div class="feature-grid">
                        {HOME_HIGHLIGHTS
                            .iter()
                            .map(|item| view! { <FeatureCard item=*item icon=ICON_LIGHTNING /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <CallToAction />
        </section>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-copy">
                <h1 class="hero-title">
                    <span class="hero-title-line">"Beautiful design for"</span>
                    " "
                    <span class="hero-title-accent">"your digital presence"</span>
                </h1>
                <p class="hero-subtitle">
                    "Create a stunning website that blends traditional elements with modern aesthetics. "
                    "Our platform helps you build a professional online presence that stands out."
                </p>
                <div class="hero-actions">
                    <a href="#" class="btn btn-primary btn-lg">"Get started"</a>
                    <a href="#" class="btn btn-soft btn-lg">"Live demo"</a>
                </div>
            </div>
            // Decorative page mock
            <div class="hero-preview" aria-hidden="true">
                <div class="preview-card">
                    <div class="preview-image"></div>
                    <div class="preview-line preview-line-long"></div>
                    <div class="preview-line preview-line-short"></div>
                    <div class="preview-button"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <div class="cta-band">
            <div class="cta-inner">
                <h2 class="cta-title">
                    <span class="cta-title-line">"Ready to get started?"</span>
                    <span class="cta-title-line">"Create your website today."</span>
                </h2>
                <p class="cta-text">
                    "Join thousands of satisfied customers who have transformed their online presence with our platform."
                </p>
                <a href="#" class="btn btn-inverse btn-lg">"Sign up for free"</a>
            </div>
        </div>
    }
}
