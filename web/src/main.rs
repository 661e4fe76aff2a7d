use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::{DashboardConfig, DataSources};
use ui::i18n;
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme, same file the desktop build embeds.
const TRACKS_CSV: Asset = asset!("/assets/data/SpotifyFeatures.csv");
const GENRE_YEARS_CSV: Asset = asset!("/assets/data/songs_normalize.csv");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; AppNavbar updates it on locale change.
    let lang_code = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    // Datasets are bundled assets, fetched relative to the page.
    use_context_provider(|| {
        DashboardConfig::with_sources(DataSources::new(
            TRACKS_CSV.to_string(),
            GENRE_YEARS_CSV.to_string(),
        ))
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        AppNavbar { }
        // Dashboard follows the language signal itself and keeps its scene.
        Dashboard { }
    }
}
