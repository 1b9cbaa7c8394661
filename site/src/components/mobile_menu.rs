//! Collapsible navigation panel for narrow viewports.

use leptos::prelude::*;

use super::{Icon, NavLink, ICON_BELL, ICON_USER};
use crate::config::SiteConfig;
use crate::controller::NavController;
use crate::state::{NavSource, Tab};

/// Rendered by [`super::Header`] only while the menu is open. Picking a tab
/// here closes the panel.
#[component]
pub fn MobileMenu(nav: NavController, config: SiteConfig) -> impl IntoView {
    let links = Tab::ALL
        .into_iter()
        .map(|tab| view! { <NavLink nav=nav tab=tab source=NavSource::Mobile /> })
        .collect_view();

    view! {
        <div class="mobile-panel" data-role="mobile-panel">
            <div class="mobile-links">{links}</div>
            <div class="mobile-account">
                <div class="mobile-account-row">
                    <span class="avatar avatar-md">
                        <Icon path=ICON_USER />
                    </span>
                    <div class="mobile-account-id">
                        <div class="mobile-account-name">{config.user_name}</div>
                        <div class="mobile-account-email">{config.user_email}</div>
                    </div>
                    <button class="icon-btn mobile-account-bell" title="Notifications">
                        <Icon path=ICON_BELL />
                    </button>
                </div>
                <div class="mobile-account-links">
                    <a href="#" class="mobile-account-link">"Your Profile"</a>
                    <a href="#" class="mobile-account-link">"Settings"</a>
                    <a href="#" class="mobile-account-link">"Sign out"</a>
                </div>
            </div>
        </div>
    }
}
