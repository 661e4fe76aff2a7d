#![cfg(test)]
//! Mount lint for the launchers.
//!
//! `Dashboard` owns the scene cursor, filters and loaded datasets. Keying it (or
//! any ancestor) on the language code would remount it on every locale switch,
//! sending the viewer back to the title slide and re-reading both CSVs. Only
//! the localized subtree inside `Dashboard` may be keyed on the language.

const DESKTOP_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));
const WEB_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/src/main.rs"));
const DASHBOARD: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/src/views/dashboard.rs"
));

#[test]
fn launchers_do_not_key_the_dashboard() {
    for (name, source) in [("desktop", DESKTOP_MAIN), ("web", WEB_MAIN)] {
        assert!(
            source.contains("Dashboard { }"),
            "{name} launcher no longer mounts Dashboard"
        );
        assert!(
            !source.contains("key:"),
            "{name} launcher keys a subtree; a language switch would reset the dashboard"
        );
    }
}

#[test]
fn language_key_sits_below_dashboard_state() {
    let key = DASHBOARD
        .find("key: \"{lang_marker}\"")
        .expect("dashboard keys its localized subtree on the language");
    for hook in ["use_signal(|| ViewState", "use_resource(", "use_coroutine("] {
        let at = DASHBOARD
            .find(hook)
            .unwrap_or_else(|| panic!("dashboard no longer calls `{hook}`"));
        assert!(at < key, "`{hook}` must run above the language-keyed node");
    }
}
