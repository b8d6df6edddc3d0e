//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::dashboard_shell::{DashboardShell, Role};
use crate::components::require_auth::RequireAuth;
use crate::pages::{campaigns::CampaignsPage, login::LoginPage, overview::OverviewPage, settings::SettingsPage};
use crate::state::auth::AuthState;
use crate::state::settings::provide_settings;
use crate::util::auth::DEFAULT_AFTER_LOGIN_PATH;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Start a session check against the auth proxy. A check superseded by a
/// newer one (or by sign-in/sign-out) is dropped on arrival.
fn refresh_session(auth: RwSignal<AuthState>) {
    let Some(check) = auth.try_update(AuthState::begin_check) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        let applied = auth.try_update(|a| a.finish_check(check, user)).unwrap_or(false);
        if !applied {
            log::debug!("discarded stale session check {check:?}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = check;
}

/// Root application component.
///
/// Provides the auth session and settings contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_settings(Arc::new(LocalStorage));

    refresh_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/adpanel.css"/>
        <Title text="Advertiser Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("advertiser") view=AdvertiserArea>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_AFTER_LOGIN_PATH/> }/>
            </Routes>
        </Router>
    }
}

/// Guarded advertiser dashboard; child routes render in the shell's outlet.
#[component]
fn AdvertiserArea() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardShell role=Role::Advertiser/>
        </RequireAuth>
    }
}
