#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::{info, warn};

use ui::components::AppNavbar;
use ui::core::config::{DashboardConfig, DataSources};
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop copy.

/// Optional override file read from the resource directory.
const CONFIG_FILE: &str = "soundstage.json";

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Soundstage – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Provide global reactive language code signal (mirrors web approach).
    // AppNavbar (shared) will update this via context on language selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    use_context_provider(|| load_config(&resolve_resource_dir()));

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        AppNavbar { }
        // Dashboard follows the language signal itself and keeps its scene.
        Dashboard { }
    }
}

/// Dataset paths under `<resource dir>/data`, optionally overridden by
/// `soundstage.json`. Relative paths in the override resolve against the
/// resource directory.
fn load_config(resource_dir: &Path) -> DashboardConfig {
    let data_dir = resource_dir.join("data");
    let defaults = DataSources::new(
        data_dir.join("SpotifyFeatures.csv").to_string_lossy(),
        data_dir.join("songs_normalize.csv").to_string_lossy(),
    );

    let override_path = resource_dir.join(CONFIG_FILE);
    let mut config = match std::fs::read_to_string(&override_path) {
        Ok(raw) => match DashboardConfig::from_json(&raw) {
            Ok(config) => {
                info!(path = %override_path.display(), "using configuration override");
                config
            }
            Err(err) => {
                warn!(%err, path = %override_path.display(), "ignoring invalid configuration");
                DashboardConfig::with_sources(defaults.clone())
            }
        },
        Err(_) => DashboardConfig::with_sources(defaults.clone()),
    };

    if config.sources == DataSources::default() {
        config.sources = defaults;
    } else {
        config.sources = DataSources::new(
            resource_dir.join(&config.sources.tracks).to_string_lossy(),
            resource_dir.join(&config.sources.genre_years).to_string_lossy(),
        );
    }
    config
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` read the datasets bundled with the web crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
