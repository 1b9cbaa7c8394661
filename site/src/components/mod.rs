//! Leptos UI components for the site.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (SSR snapshots only)
//! └── SiteApp
//!     ├── Header
//!     │   ├── NavLink × 4 (desktop)
//!     │   └── MobileMenu (only while the menu is open)
//!     │       └── NavLink × 4 (mobile)
//!     ├── ContentArea: one of
//!     │   ├── HomePanel
//!     │   ├── FeaturesPanel
//!     │   ├── PricingPanel
//!     │   └── AboutPanel
//!     └── Footer
//! ```
//!
//! Navigation state flows down as a [`crate::controller::NavController`]
//! prop; static copy comes from [`crate::content`].

mod about;
mod app;
mod features;
mod footer;
mod header;
mod home;
mod icons;
mod mobile_menu;
mod pricing;

pub use about::AboutPanel;
pub use app::{SiteApp, SiteDocument};
pub use features::{FeatureCard, FeaturesPanel};
pub use footer::Footer;
pub use header::{Header, NavLink};
pub use home::HomePanel;
pub use icons::*;
pub use mobile_menu::MobileMenu;
pub use pricing::PricingPanel;
