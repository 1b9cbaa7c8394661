//! UI state model for the site.
//!
//! The whole page is driven by two cells: which [`Tab`] is shown in the main
//! content area, and whether the mobile navigation panel is open. Both live
//! in [`SiteState`] so a single update can change them together.
//!
//! ```rust
//! use aesthetic_site::state::{NavSource, SiteState, Tab};
//!
//! let mut state = SiteState::default();
//! state.toggle_menu();
//! state.select_tab(Tab::Pricing, NavSource::Mobile);
//!
//! assert_eq!(state.active_tab, Tab::Pricing);
//! assert!(!state.menu_open);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// One of the four content views of the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Hero, feature highlights and call to action
    #[default]
    Home,
    /// Full feature grid
    Features,
    /// Three-tier pricing table
    Pricing,
    /// Company story and team
    About,
}

impl Tab {
    /// All tabs in header order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Features, Tab::Pricing, Tab::About];

    /// Human-facing link label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Features => "Features",
            Tab::Pricing => "Pricing",
            Tab::About => "About",
        }
    }

    /// Lowercase identifier used in `data-tab` / `data-panel` attributes.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Features => "features",
            Tab::Pricing => "pricing",
            Tab::About => "about",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tab {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SiteError::UnknownTab(s.to_string()))
    }
}

/// Which link list a tab selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    /// Header links shown on wide viewports
    Desktop,
    /// Links inside the collapsible mobile panel
    Mobile,
}

/// The complete UI state of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    /// Tab whose panel is rendered in the main area
    pub active_tab: Tab,
    /// Whether the mobile navigation panel is shown
    pub menu_open: bool,
}

impl SiteState {
    /// State with `tab` active and the menu closed.
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            menu_open: false,
        }
    }

    /// Make `tab` the active one. Picking a destination from the mobile
    /// panel also closes it.
    pub fn select_tab(&mut self, tab: Tab, source: NavSource) {
        self.active_tab = tab;
        if source == NavSource::Mobile {
            self.menu_open = false;
        }
        tracing::debug!(tab = %tab, ?source, menu_open = self.menu_open, "tab selected");
    }

    /// Flip the mobile panel open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(menu_open = self.menu_open, "menu toggled");
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = SiteState::default();
        assert_eq!(
            state,
            SiteState {
                active_tab: Tab::Home,
                menu_open: false,
            }
        );
    }

    #[test]
    fn select_tab_sets_active_for_every_tab() {
        for tab in Tab::ALL {
            let mut state = SiteState::default();
            state.select_tab(tab, NavSource::Desktop);
            assert_eq!(state.active_tab, tab);
            let active: Vec<Tab> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
            assert_eq!(active, vec![tab]);
        }
    }

    #[test]
    fn toggle_menu_flips_back_and_forth() {
        let mut state = SiteState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn mobile_selection_closes_menu_in_same_update() {
        let mut state = SiteState::default();
        state.toggle_menu();
        state.select_tab(Tab::About, NavSource::Mobile);
        assert_eq!(
            state,
            SiteState {
                active_tab: Tab::About,
                menu_open: false,
            }
        );
    }

    #[test]
    fn desktop_selection_leaves_menu_alone() {
        let mut state = SiteState::default();
        state.toggle_menu();
        state.select_tab(Tab::Features, NavSource::Desktop);
        assert!(state.menu_open);
        assert_eq!(state.active_tab, Tab::Features);
    }

    #[test]
    fn toggling_menu_keeps_active_tab() {
        let mut state = SiteState::with_tab(Tab::Pricing);
        state.toggle_menu();
        assert_eq!(state.active_tab, Tab::Pricing);
    }

    #[test]
    fn parses_slugs_case_insensitively() {
        assert_eq!("pricing".parse::<Tab>().unwrap(), Tab::Pricing);
        assert_eq!(" About ".parse::<Tab>().unwrap(), Tab::About);
        assert_eq!("FEATURES".parse::<Tab>().unwrap(), Tab::Features);
    }

    #[test]
    fn rejects_unknown_tab() {
        let err = "blog".parse::<Tab>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownTab(ref s) if s == "blog"));
    }

    #[test]
    fn serializes_as_lowercase_slug() {
        let json = serde_json::to_string(&SiteState::with_tab(Tab::Features)).unwrap();
        assert_eq!(json, r#"{"active_tab":"features","menu_open":false}"#);
        let back: SiteState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.active_tab, Tab::Features);
    }
}
