//! Shared UI crate for Soundstage: data loading, aggregation, scene state and
//! the chart views used by both the web and desktop launchers.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand header + locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

