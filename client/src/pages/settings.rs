//! Advertiser settings page: carousel rotation interval.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::settings::{CarouselSpeed, SettingsError, use_settings};

/// Result banner shown under the settings form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveFeedback {
    Saved(String),
    Invalid(String),
}

impl SaveFeedback {
    fn from_outcome(outcome: &Result<CarouselSpeed, SettingsError>) -> Self {
        match outcome {
            Ok(speed) => Self::Saved(format!("Saved. Carousel rotates every {speed}.")),
            Err(e) => Self::Invalid(e.to_string()),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Saved(_) => "settings-message settings-message--ok",
            Self::Invalid(_) => "settings-message settings-message--error",
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Saved(s) | Self::Invalid(s) => s.clone(),
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = use_settings();
    let draft = RwSignal::new(settings.carousel_speed_untracked().as_millis().to_string());
    let feedback = RwSignal::new(None::<SaveFeedback>);

    let settings_submit = settings.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = settings_submit.set_carousel_speed_from_input(&draft.get());
        if let Ok(speed) = &outcome {
            draft.set(speed.as_millis().to_string());
        }
        feedback.set(Some(SaveFeedback::from_outcome(&outcome)));
    };

    let current = move || settings.carousel_speed().to_string();

    view! {
        <section class="settings-page">
            <h2>"Site settings"</h2>
            <form class="settings-form" on:submit=on_submit>
                <label class="settings-form__label" for="carousel-speed">
                    "Carousel speed (milliseconds)"
                </label>
                <input
                    id="carousel-speed"
                    class="settings-form__input"
                    type="number"
                    min="1"
                    step="100"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn settings-form__save" type="submit">
                    "Save"
                </button>
            </form>
            <p class="settings-page__current">"Current: " {current}</p>
            {move || {
                feedback
                    .get()
                    .map(|f| view! { <p class=f.class()>{f.text()}</p> })
            }}
        </section>
    }
}
