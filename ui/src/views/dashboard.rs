use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, error, info};

use crate::charts::{ElementSurface, SceneFrame, Tooltip, TooltipView};
use crate::core::aggregate::ALL_GENRES;
use crate::core::config::DashboardConfig;
use crate::core::dataset::{self, DashboardData};
use crate::core::scene::{reduce, ControlVisibility, DashboardEvent, ViewState, SCENES, YEAR_MAX, YEAR_MIN};
use crate::core::streams::ALL_COUNTRIES;
use crate::views::TitleSlide;

#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    // Subscribe to the global language code (if provided) so labels re-render on change.
    // The dashboard itself is never keyed on it; only its localized subtree is.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut view = use_signal(|| ViewState::new(config.initial_year));
    let mut tooltip = use_signal(Tooltip::hidden);

    let sources = config.sources.clone();
    let data = use_resource(move || {
        let sources = sources.clone();
        async move {
            let loaded = dataset::load(&sources).await;
            if let Err(err) = &loaded {
                error!(%err, "dataset load failed; dashboard stays on the title slide");
            }
            loaded.map(Rc::new)
        }
    });

    let dispatcher = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| async move {
        while let Some(event) = rx.next().await {
            let before = view.peek().clone();
            let after = reduce(&before, event.clone());
            if after == before {
                debug!(?event, "event left view state unchanged");
                continue;
            }
            if after.scene != before.scene {
                info!(
                    from = before.scene.index(),
                    to = after.scene.index(),
                    title = after.scene.descriptor().title,
                    "scene change"
                );
                tooltip.set(Tooltip::hidden());
            }
            view.set(after);
        }
    });

    let (loaded, loading, load_error) = match &*data.read() {
        None => (None, true, None),
        Some(Ok(loaded)) => (Some(loaded.clone()), false, None),
        Some(Err(err)) => (None, false, Some(err.to_string())),
    };

    let state = view();

    rsx! {
        // Keyed by language so localized children remount with new strings.
        // View state, tooltip and loaded data live above this node and survive.
        div {
            key: "{lang_marker}",
            match loaded.filter(|_| state.started) {
                Some(loaded) => render_visualization(&state, &loaded, tooltip, dispatcher),
                None => rsx! {
                    TitleSlide {
                        loading,
                        error: load_error,
                        on_start: move |_| dispatcher.send(DashboardEvent::Start),
                    }
                },
            }
        }

        TooltipView { tooltip }
    }
}

fn render_visualization(
    state: &ViewState,
    data: &DashboardData,
    tooltip: Signal<Tooltip>,
    dispatcher: Coroutine<DashboardEvent>,
) -> Element {
    let controls = ControlVisibility::for_scene(state.scene);
    let position = state.scene.index() + 1;
    let total = SCENES.len();
    let year = state.current_year;
    let filter_class = if controls.filter {
        "scene-controls"
    } else {
        "scene-controls d-none"
    };
    let slider_style = if controls.year_slider {
        "display: block"
    } else {
        "display: none"
    };

    #[cfg(debug_assertions)]
    debug!(
        scene = state.scene.index(),
        year,
        genre = %state.selected_genre,
        country = %state.selected_country,
        "render scene"
    );

    let mut surface = ElementSurface::new(tooltip);
    SceneFrame::build(state, data).draw(&mut surface);
    let scene = surface.into_element();

    let genre_options = data.genres.clone();
    let country_options = data.country_options();
    let selected_genre = state.selected_genre.clone();
    let selected_country = state.selected_country.clone();

    rsx! {
        section { id: "visualization", class: "page visualization",
            div { class: "scene-nav",
                button {
                    id: "prev",
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: state.scene.is_first(),
                    onclick: move |_| dispatcher.send(DashboardEvent::Prev),
                    {crate::t!("button-prev")}
                }
                span { class: "scene-nav__position",
                    {crate::t!("scene-position", current = position, total = total)}
                }
                button {
                    id: "next",
                    r#type: "button",
                    class: "button button--accent",
                    disabled: state.scene.is_last(),
                    onclick: move |_| dispatcher.send(DashboardEvent::Next),
                    {crate::t!("button-next")}
                }
            }

            div {
                id: "filter-container",
                class: "{filter_class}",
                if controls.genre_select {
                    label { class: "scene-controls__label", r#for: "genre-select",
                        {crate::t!("control-genre")}
                    }
                    select {
                        id: "genre-select",
                        onchange: move |evt: FormEvent| dispatcher.send(DashboardEvent::SelectGenre(evt.value())),
                        for genre in genre_options.into_iter() {
                            option {
                                key: "{genre}",
                                value: "{genre}",
                                selected: genre == selected_genre,
                                {option_label(&genre, ALL_GENRES)}
                            }
                        }
                    }
                }
                if controls.country_select {
                    label { class: "scene-controls__label", r#for: "country-select",
                        {crate::t!("control-country")}
                    }
                    select {
                        id: "country-select",
                        onchange: move |evt: FormEvent| dispatcher.send(DashboardEvent::SelectCountry(evt.value())),
                        for country in country_options.into_iter() {
                            option {
                                key: "{country}",
                                value: "{country}",
                                selected: country == selected_country,
                                {option_label(&country, ALL_COUNTRIES)}
                            }
                        }
                    }
                }
            }

            div {
                id: "slider-container",
                class: "scene-slider",
                style: "{slider_style}",
                label { class: "scene-controls__label", r#for: "yearSlider",
                    {crate::t!("control-year")}
                    " "
                    span { id: "yearLabel", class: "scene-slider__year", "{year}" }
                }
                input {
                    id: "yearSlider",
                    r#type: "range",
                    min: "{YEAR_MIN}",
                    max: "{YEAR_MAX}",
                    step: "1",
                    value: "{year}",
                    oninput: move |evt: FormEvent| match evt.value().parse::<i32>() {
                        Ok(year) => dispatcher.send(DashboardEvent::SetYear(year)),
                        Err(err) => debug!(%err, "ignoring non-numeric slider value"),
                    },
                }
            }

            div { id: "scene", class: "scene", {scene} }
        }
    }
}

/// Sentinel dropdown values get a localized label; everything else is shown as is.
fn option_label(value: &str, sentinel: &str) -> String {
    if value != sentinel {
        return value.to_string();
    }
    if sentinel == ALL_GENRES {
        crate::t!("option-all-genres")
    } else {
        crate::t!("option-all-countries")
    }
}
