//! Route guard component for protected subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. Decisions come from `util::auth::evaluate`;
//! this component only renders the decision and hands redirects to the
//! router from an effect, so server rendering never navigates.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{DEFAULT_LOGIN_PATH, GuardDecision, current_location, dispatch, evaluate};

/// Render `children` only for an authenticated session.
///
/// While the session loads a centered status placeholder is shown. Once it
/// settles without a user, the current history entry is replaced by
/// `redirect_to` (default `/admin/login`) with `{ from }` navigation state.
#[component]
pub fn RequireAuth(
    /// Login route to redirect to.
    #[prop(optional, into)]
    redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let redirect_to = redirect_to.unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());

    let decision = Memo::new(move |_| {
        let here = current_location(&location.pathname.get(), &location.search.get(), &location.hash.get());
        evaluate(&auth.get(), &here, &redirect_to)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(intent) = decision.get() {
            dispatch(&intent, &navigate);
        }
    });

    move || match decision.get() {
        GuardDecision::RenderChildren => children().into_any(),
        GuardDecision::ShowPlaceholder => view! {
            <div class="route-guard route-guard--loading" role="status" aria-busy="true">
                <span class="route-guard__spinner" aria-hidden="true"></span>
                <span class="route-guard__label">"Loading..."</span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! {
            <div class="route-guard route-guard--redirect" role="status">
                <span class="route-guard__label">"Redirecting to login..."</span>
            </div>
        }
        .into_any(),
    }
}
