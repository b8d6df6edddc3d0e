//! Role dashboard shell: sidebar navigation around nested protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the view of a parent route inside `RequireAuth`. The active
//! child route renders through `Outlet`. Signing out only clears the session;
//! the enclosing guard notices and performs the redirect.

#[cfg(test)]
#[path = "dashboard_shell_test.rs"]
mod dashboard_shell_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::auth::AuthState;

/// Symbol shown next to a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Overview,
    Campaigns,
    Settings,
}

impl NavIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Overview => "▦",
            Self::Campaigns => "◎",
            Self::Settings => "⚙",
        }
    }
}

/// One entry in a role's sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub to: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    /// Highlight only on an exact path match (index routes).
    pub end: bool,
}

const ADVERTISER_NAV: &[NavItem] = &[
    NavItem { to: "/advertiser", label: "Overview", icon: NavIcon::Overview, end: true },
    NavItem { to: "/advertiser/campaigns", label: "Campaigns", icon: NavIcon::Campaigns, end: false },
    NavItem { to: "/advertiser/settings", label: "Settings", icon: NavIcon::Settings, end: false },
];

/// Static advertiser navigation.
#[must_use]
pub fn advertiser_nav_items() -> &'static [NavItem] {
    ADVERTISER_NAV
}

/// Dashboard audience. Each role owns its navigation and fallback label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Advertiser,
}

impl Role {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Advertiser => "Advertiser Portal",
        }
    }

    /// Name shown when the session carries neither a full name nor an email.
    #[must_use]
    pub fn fallback_label(self) -> &'static str {
        match self {
            Self::Advertiser => "Advertiser",
        }
    }

    #[must_use]
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Advertiser => "/advertiser",
        }
    }

    #[must_use]
    pub fn nav_items(self) -> &'static [NavItem] {
        match self {
            Self::Advertiser => advertiser_nav_items(),
        }
    }
}

/// Pick a display name: full name, then email, then `fallback`.
/// Blank values count as absent.
#[must_use]
pub fn resolve_display_name(full_name: Option<&str>, email: Option<&str>, fallback: &str) -> String {
    [full_name, email]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Display name for the current session under `role`.
#[must_use]
pub fn session_display_name(state: &AuthState, role: Role) -> String {
    let user = state.user.as_ref();
    resolve_display_name(
        user.and_then(|u| u.full_name.as_deref()),
        user.and_then(|u| u.email.as_deref()),
        role.fallback_label(),
    )
}

/// Sidebar + content frame for one role.
#[component]
pub fn DashboardShell(#[prop(optional)] role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || session_display_name(&auth.get(), role);

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            auth.update(AuthState::sign_out);
        });
    };

    view! {
        <div class="dashboard-shell">
            <aside class="dashboard-shell__sidebar">
                <a class="dashboard-shell__brand" href=role.base_path()>
                    {role.title()}
                </a>
                <nav class="dashboard-shell__nav">
                    <ul>
                        {role
                            .nav_items()
                            .iter()
                            .map(|item| view! { <NavEntry item=*item/> })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
                <div class="dashboard-shell__footer">
                    <span class="dashboard-shell__user" title="Signed in as">
                        {display_name}
                    </span>
                    <button class="btn dashboard-shell__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </aside>
            <main class="dashboard-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}

/// Single sidebar link. The router marks the active link with
/// `aria-current="page"`.
#[component]
fn NavEntry(item: NavItem) -> impl IntoView {
    view! {
        <li class="dashboard-shell__nav-item">
            <A href=item.to exact=item.end>
                <span class="dashboard-shell__nav-icon" aria-hidden="true">
                    {item.icon.glyph()}
                </span>
                <span class="dashboard-shell__nav-label">{item.label}</span>
            </A>
        </li>
    }
}
