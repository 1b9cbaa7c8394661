use leptos::prelude::*;

use super::{Icon, ICON_CHECK};
use crate::content::{FeatureItem, FEATURE_GRID};

#[component]
pub fn FeaturesPanel() -> impl IntoView {
    view! {
        <section class="panel panel-features" data-panel="features">
            <div class="container">
                <div class="section-header centered">
                    <h2 class="section-eyebrow">"Features"</h2>
                    <p class="section-title">"Everything you need to succeed online"</p>
                    <p class="section-description">
                        "Our comprehensive suite of tools and features makes it easy to create a professional website."
                    </p>
                </div>
                <div class="feature-grid feature-grid-wide">
                    {FEATURE_GRID
                        .iter()
                        .map(|item| view! { <FeatureCard item=*item icon=ICON_CHECK /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Icon badge with a title and description beside it.
#[component]
pub fn FeatureCard(item: FeatureItem, icon: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-badge">
                <Icon path=icon size="24" />
            </div>
            <div class="feature-body">
                <h3 class="feature-title">{item.title}</h3>
                <p class="feature-description">{item.description}</p>
            </div>
        </div>
    }
}
