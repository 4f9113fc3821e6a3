//! Access guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted synchronously before any protected view renders. A denial is a
//! routing decision (redirect to `/login`), never an error.
//!
//! DESIGN
//! ======
//! While the persisted session is still being read the decision is
//! `Pending`, which renders the same placeholder as a denial. The redirect
//! itself runs from a client-side effect, so server HTML never depends on
//! browser storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Role, Session};
use crate::routes::{Access, LOGIN_PATH};
use crate::state::auth::AuthState;

/// What the router should do with a guarded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session not restored yet; show nothing protected.
    Pending,
    Redirect(&'static str),
}

/// `true` iff there is a session and its role is in `required`.
#[must_use]
pub fn can_access(session: Option<&Session>, required: &[Role]) -> bool {
    session.is_some_and(|s| required.contains(&s.role))
}

/// Decide whether a view with `access` may render for `session`.
#[must_use]
pub fn guard(session: Option<&Session>, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Render,
        Access::Roles(roles) if can_access(session, roles) => GuardDecision::Render,
        Access::Roles(_) => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Guard decision for the full auth state, including the restoring phase.
#[must_use]
pub fn decide(state: &AuthState, access: Access) -> GuardDecision {
    match access {
        Access::Roles(_) if state.restoring => GuardDecision::Pending,
        _ => guard(state.session.as_ref(), access),
    }
}

/// Navigate away whenever `decision` settles on a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, NavigateOptions::default());
        }
    });
}
