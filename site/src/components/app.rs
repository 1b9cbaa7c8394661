//! Top-level page shell.

use leptos::prelude::*;

use super::{AboutPanel, FeaturesPanel, Footer, Header, HomePanel, PricingPanel};
use crate::config::SiteConfig;
use crate::controller::NavController;
use crate::state::{SiteState, Tab};
use crate::styles::SITE_CSS;

/// Header, the active tab's panel, and the footer.
///
/// `initial` defaults to home with the menu closed; SSR snapshots pass any
/// other state to render it directly.
#[component]
pub fn SiteApp(
    #[prop(optional)] initial: SiteState,
    #[prop(optional)] config: SiteConfig,
) -> impl IntoView {
    let nav = NavController::new(initial);

    view! {
        <div class="site">
            <Header nav=nav config=config.clone() />
            <main class="site-main">
                <ContentArea nav=nav />
            </main>
            <Footer config=config />
        </div>
    }
}

/// Exactly one panel, picked by the active tab.
#[component]
fn ContentArea(nav: NavController) -> impl IntoView {
    move || match nav.active_tab() {
        Tab::Home => view! { <HomePanel /> }.into_any(),
        Tab::Features => view! { <FeaturesPanel /> }.into_any(),
        Tab::Pricing => view! { <PricingPanel /> }.into_any(),
        Tab::About => view! { <AboutPanel /> }.into_any(),
    }
}

/// Full HTML document around [`SiteApp`], used for static snapshots.
#[component]
pub fn SiteDocument(state: SiteState, config: SiteConfig) -> impl IntoView {
    let title = config.brand_name.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SiteApp initial=state config=config />
            </body>
        </html>
    }
}
