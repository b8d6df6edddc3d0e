//! Reserved ad placement.
//!
//! Renders a fixed-size placeholder so layouts keep their shape until a
//! creative is delivered into the slot.

#[cfg(test)]
#[path = "ad_slot_test.rs"]
mod ad_slot_test;

use leptos::prelude::*;

/// Standard IAB placement sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdSize {
    /// 728x90 leaderboard.
    #[default]
    Leaderboard,
    /// 300x250 medium rectangle.
    Rectangle,
    /// 160x600 wide skyscraper.
    Skyscraper,
}

impl AdSize {
    /// Width and height in CSS pixels.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Leaderboard => (728, 90),
            Self::Rectangle => (300, 250),
            Self::Skyscraper => (160, 600),
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Leaderboard => "ad-slot--leaderboard",
            Self::Rectangle => "ad-slot--rectangle",
            Self::Skyscraper => "ad-slot--skyscraper",
        }
    }

    /// Inline style pinning the placeholder to the placement size.
    #[must_use]
    pub fn style(self) -> String {
        let (w, h) = self.dimensions();
        format!("width: {w}px; max-width: 100%; height: {h}px;")
    }
}

#[component]
pub fn AdSlot(
    /// Placement identifier, exposed as `data-slot`.
    #[prop(into)]
    slot: String,
    #[prop(optional)] size: AdSize,
) -> impl IntoView {
    let (w, h) = size.dimensions();
    view! {
        <aside
            class=format!("ad-slot {}", size.css_modifier())
            style=size.style()
            data-slot=slot
            aria-label="Advertisement"
        >
            <span class="ad-slot__label">{format!("Ad {w}×{h}")}</span>
        </aside>
    }
}
