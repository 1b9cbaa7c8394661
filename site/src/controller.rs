//! Reactive wrapper around [`SiteState`].
//!
//! Both state cells sit in one `RwSignal`, so a mobile selection that sets
//! the tab and closes the menu is a single reactive update.

use leptos::prelude::*;

use crate::state::{NavSource, SiteState, Tab};

/// Handle passed to every component that reads or mutates navigation state.
#[derive(Clone, Copy, Debug)]
pub struct NavController {
    state: RwSignal<SiteState>,
}

impl NavController {
    pub fn new(initial: SiteState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn select_tab(&self, tab: Tab, source: NavSource) {
        self.state.update(|state| state.select_tab(tab, source));
    }

    pub fn toggle_menu(&self) {
        self.state.update(SiteState::toggle_menu);
    }

    /// Tracked read of the active tab.
    pub fn active_tab(&self) -> Tab {
        self.state.with(|state| state.active_tab)
    }

    /// Tracked read of the menu flag.
    pub fn menu_open(&self) -> bool {
        self.state.with(|state| state.menu_open)
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.state.with(|state| state.is_active(tab))
    }

    /// Untracked copy of the current state.
    pub fn snapshot(&self) -> SiteState {
        self.state.get_untracked()
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(SiteState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn starts_from_initial_state() {
        with_owner(|| {
            let nav = NavController::new(SiteState::with_tab(Tab::About));
            assert_eq!(nav.snapshot(), SiteState::with_tab(Tab::About));
            assert!(nav.is_active(Tab::About));
        });
    }

    #[test]
    fn copies_share_one_state() {
        with_owner(|| {
            let nav = NavController::default();
            let other = nav;
            other.toggle_menu();
            assert!(nav.menu_open());
        });
    }

    #[test]
    fn mobile_selection_is_one_update() {
        with_owner(|| {
            let nav = NavController::default();
            nav.toggle_menu();
            nav.select_tab(Tab::Pricing, NavSource::Mobile);
            assert_eq!(
                nav.snapshot(),
                SiteState {
                    active_tab: Tab::Pricing,
                    menu_open: false,
                }
            );
        });
    }

    #[test]
    fn desktop_selection_keeps_menu_state() {
        with_owner(|| {
            let nav = NavController::default();
            nav.toggle_menu();
            nav.select_tab(Tab::Features, NavSource::Desktop);
            assert_eq!(nav.active_tab(), Tab::Features);
            assert!(nav.menu_open());
        });
    }
}
