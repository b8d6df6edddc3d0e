//! Advertiser landing page inside the dashboard shell.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::components::ad_slot::{AdSize, AdSlot};
use crate::components::dashboard_shell::{Role, session_display_name};
use crate::state::auth::AuthState;
use crate::state::settings::{CarouselSpeed, use_settings};

/// Human-friendly interval, e.g. `10 seconds` or `1.5 seconds`.
fn describe_interval(speed: CarouselSpeed) -> String {
    let millis = speed.as_millis();
    if millis < 1000 {
        return format!("{millis} ms");
    }
    let whole = millis / 1000;
    let tenths = (millis % 1000) / 100;
    let unit = if whole == 1 && tenths == 0 { "second" } else { "seconds" };
    if tenths == 0 {
        format!("{whole} {unit}")
    } else {
        format!("{whole}.{tenths} {unit}")
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = use_settings();

    let greeting = move || format!("Welcome, {}", session_display_name(&auth.get(), Role::Advertiser));
    let rotation = move || describe_interval(settings.carousel_speed());

    view! {
        <section class="overview-page">
            <h2>{greeting}</h2>
            <p class="overview-page__carousel">
                "Featured placements rotate every " {rotation} "."
            </p>
            <AdSlot slot="overview-top" size=AdSize::Leaderboard/>
        </section>
    }
}
