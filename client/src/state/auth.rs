//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the access guard before any protected view renders, and by the
//! login page to show progress and failures.
//!
//! DESIGN
//! ======
//! `AuthState::apply` is the whole transition table:
//!
//! - restoring --`SessionRestored`--> authenticated or anonymous
//! - anonymous --`LoginDispatched`--> authenticating
//! - authenticating --`LoginSucceeded`--> authenticated (persist session)
//! - authenticating --`LoginFailed`--> anonymous
//! - any --`Logout`--> anonymous (clear persisted session)
//!
//! Every dispatch gets a fresh `LoginAttempt`; completions carrying an older
//! attempt are dropped, so a superseded response cannot transition twice.
//!
//! The app starts in `restoring` on both server and client, so the first
//! client render matches the server HTML. The persisted session is read only
//! after hydration, which is the `restoring` exit.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::types::Session;

/// Identifier of one dispatched login. Monotonically increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoginAttempt(pub u64);

/// Coarse lifecycle phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Persisted session not read yet.
    Restoring,
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
    /// Last login failure shown to the operator.
    pub error: Option<String>,
    /// Most recently dispatched attempt; zero before the first login.
    /// Bookkeeping only: it is not part of the observable session state.
    pub attempt: u64,
    /// Set until the persisted session has been read.
    pub restoring: bool,
}

/// Inputs to the transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SessionRestored(Option<Session>),
    LoginDispatched,
    LoginSucceeded { attempt: LoginAttempt, session: Session },
    LoginFailed { attempt: LoginAttempt, message: String },
    Logout,
}

/// Result of applying one event, including the store side effect to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// A login was started under this attempt.
    Dispatched(LoginAttempt),
    /// Session published; persist it.
    Persist(Session),
    /// Session dropped; clear the persisted copy.
    Clear,
    /// Login failed; nothing to persist.
    Failed,
    /// Persisted session read; nothing to write back.
    Restored,
    /// Stale completion or unsupported transition; state unchanged.
    Ignored,
}

impl AuthState {
    /// Startup state before the credential store has been consulted.
    #[must_use]
    pub fn restoring() -> Self {
        Self { restoring: true, ..Self::default() }
    }

    /// State after the credential store yielded `session`.
    #[must_use]
    pub fn restored(session: Option<Session>) -> Self {
        Self { session, ..Self::default() }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.restoring {
            AuthPhase::Restoring
        } else if self.session.is_some() {
            AuthPhase::Authenticated
        } else if self.loading {
            AuthPhase::Authenticating
        } else {
            AuthPhase::Anonymous
        }
    }

    fn is_current(&self, attempt: LoginAttempt) -> bool {
        self.loading && attempt.0 == self.attempt
    }

    /// Apply one event and report what the caller must do with the store.
    pub fn apply(&mut self, event: AuthEvent) -> Applied {
        match event {
            AuthEvent::SessionRestored(session) => {
                if !self.restoring {
                    return Applied::Ignored;
                }
                self.restoring = false;
                self.session = session;
                Applied::Restored
            }
            AuthEvent::LoginDispatched => {
                if self.session.is_some() {
                    return Applied::Ignored;
                }
                self.attempt += 1;
                self.loading = true;
                self.error = None;
                Applied::Dispatched(LoginAttempt(self.attempt))
            }
            AuthEvent::LoginSucceeded { attempt, session } => {
                if !self.is_current(attempt) {
                    return Applied::Ignored;
                }
                self.loading = false;
                self.restoring = false;
                self.error = None;
                self.session = Some(session.clone());
                Applied::Persist(session)
            }
            AuthEvent::LoginFailed { attempt, message } => {
                if !self.is_current(attempt) {
                    return Applied::Ignored;
                }
                self.loading = false;
                self.error = Some(message);
                Applied::Failed
            }
            AuthEvent::Logout => {
                // Bumping the counter orphans any login still in flight.
                self.attempt += 1;
                self.session = None;
                self.restoring = false;
                self.loading = false;
                self.error = None;
                Applied::Clear
            }
        }
    }
}

/// Somewhere an [`AuthState`] lives: a Leptos signal in the app, a `RefCell`
/// in tests and non-reactive callers.
pub trait AuthSlot {
    fn snapshot(&self) -> AuthState;

    fn update_auth(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthSlot for RefCell<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

impl AuthSlot for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn update_auth(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}
