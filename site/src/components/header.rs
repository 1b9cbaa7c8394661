//! Site header: brand, tab links, account actions and the mobile menu toggle.

use leptos::prelude::*;

use super::{Icon, MobileMenu, ICON_BELL, ICON_CHAT, ICON_LIST, ICON_USER, ICON_X};
use crate::config::SiteConfig;
use crate::controller::NavController;
use crate::state::{NavSource, Tab};

#[component]
pub fn Header(nav: NavController, config: SiteConfig) -> impl IntoView {
    let brand_initial = config.brand_initial.clone();
    let brand_name = config.brand_name.clone();

    let desktop_links = Tab::ALL
        .into_iter()
        .map(|tab| view! { <NavLink nav=nav tab=tab source=NavSource::Desktop /> })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="header-inner">
                <div class="header-left">
                    <a href="#" class="brand">
                        <span class="brand-mark">{brand_initial}</span>
                        <span class="brand-name">{brand_name}</span>
                    </a>
                    <nav class="desktop-nav">{desktop_links}</nav>
                </div>

                <div class="header-actions">
                    <button class="btn btn-primary">"Get Started"</button>
                    <button class="icon-btn" title="Notifications">
                        <Icon path=ICON_BELL />
                    </button>
                    <button class="icon-btn" title="Messages">
                        <Icon path=ICON_CHAT />
                    </button>
                    <button class="avatar-btn">
                        <span class="sr-only">"Open user menu"</span>
                        <span class="avatar avatar-sm">
                            <Icon path=ICON_USER size="16" />
                        </span>
                    </button>
                </div>

                <div class="menu-toggle-wrap">
                    <button
                        class="menu-toggle"
                        data-role="menu-toggle"
                        aria-expanded=move || nav.menu_open().to_string()
                        on:click=move |_| nav.toggle_menu()
                    >
                        <span class="sr-only">"Open main menu"</span>
                        {move || {
                            if nav.menu_open() {
                                view! { <Icon path=ICON_X size="24" /> }.into_any()
                            } else {
                                view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.menu_open()>
                <MobileMenu nav=nav config=config.clone() />
            </Show>
        </header>
    }
}

/// A tab link. Desktop and mobile lists share it; only the styling and the
/// close-on-select behavior differ.
#[component]
pub fn NavLink(nav: NavController, tab: Tab, source: NavSource) -> impl IntoView {
    let base = match source {
        NavSource::Desktop => "nav-link",
        NavSource::Mobile => "mobile-link",
    };
    let class = move || {
        if nav.is_active(tab) {
            format!("{base} active")
        } else {
            base.to_string()
        }
    };

    view! {
        <a
            href="#"
            class=class
            data-tab=tab.slug()
            aria-current=move || nav.is_active(tab).then_some("page")
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.select_tab(tab, source);
            }
        >
            {tab.label()}
        </a>
    }
}
