//! Advertiser campaigns page.

use leptos::prelude::*;

use crate::components::ad_slot::{AdSize, AdSlot};

#[component]
pub fn CampaignsPage() -> impl IntoView {
    view! {
        <section class="campaigns-page">
            <h2>"Campaigns"</h2>
            <div class="campaigns-page__layout">
                <p class="campaigns-page__empty">"No campaigns yet."</p>
                <AdSlot slot="campaigns-side" size=AdSize::Rectangle/>
            </div>
        </section>
    }
}
