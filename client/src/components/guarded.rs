//! Access-guard wrapper for protected routes.
//!
//! The decision is synchronous: children are only built once the guard says
//! `Render`. Pending and denied views both render the same empty placeholder,
//! so server HTML and the first client render agree. Denials then navigate
//! to `/login` from a client-side effect.

#[cfg(test)]
#[path = "guarded_test.rs"]
mod guarded_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::{Page, access_for};
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, decide, install_guard_redirect};

/// Render `children` only when the current session may see `page`.
#[component]
pub fn Guarded(page: Page, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access = access_for(page);
    let decision = Memo::new(move |_| auth.with(|state| decide(state, access)));

    install_guard_redirect(decision, use_navigate());

    guarded_content(decision.into(), children)
}

/// Body of [`Guarded`] for a given decision stream.
pub fn guarded_content(decision: Signal<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending | GuardDecision::Redirect(_) => {
            view! { <div class="guard-pending" aria-busy="true"></div> }.into_any()
        }
    }
}
