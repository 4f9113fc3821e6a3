//! Drives the auth state container and keeps the credential store in step.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `App` and shared through Leptos context. It is the
//! single writer of both the in-memory `AuthState` and the persisted session.

#[cfg(test)]
#[path = "session_controller_test.rs"]
mod session_controller_test;

use super::auth::{Applied, AuthEvent, AuthSlot};
use crate::net::api::AuthGateway;
use crate::net::transport::LoginTransport;
use crate::net::types::Credentials;
use crate::util::session_store::{CredentialStore, KeyValueStore};

/// How a `login` call ended for this caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    /// Login failed; the message is already on `AuthState::error`.
    Failed(String),
    /// A newer dispatch or a logout overtook this attempt.
    Superseded,
    AlreadyAuthenticated,
}

#[derive(Clone, Debug, Default)]
pub struct SessionController<K> {
    store: CredentialStore<K>,
}

impl<K: KeyValueStore> SessionController<K> {
    pub fn new(store: CredentialStore<K>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &CredentialStore<K> {
        &self.store
    }

    /// Read the persisted session into `slot`. Whatever the store holds is
    /// trusted as-is. Only the first call after startup has any effect.
    pub fn restore(&self, slot: &impl AuthSlot) -> Applied {
        let session = self.store.load();
        let found = session.is_some();
        let applied = self.dispatch(slot, AuthEvent::SessionRestored(session));
        if applied == Applied::Restored && found {
            log::info!("restored persisted session");
        }
        applied
    }

    /// Apply `event` to `slot` and run the resulting store side effect.
    pub fn dispatch(&self, slot: &impl AuthSlot, event: AuthEvent) -> Applied {
        let mut applied = Applied::Ignored;
        slot.update_auth(|state| applied = state.apply(event));
        match &applied {
            Applied::Persist(session) => {
                if let Err(e) = self.store.save(session) {
                    log::warn!("session not persisted: {e}");
                }
            }
            Applied::Clear => self.store.clear(),
            Applied::Dispatched(_) | Applied::Failed | Applied::Restored | Applied::Ignored => {}
        }
        applied
    }

    pub fn logout(&self, slot: &impl AuthSlot) {
        self.dispatch(slot, AuthEvent::Logout);
        log::info!("logged out");
    }

    /// Run one login attempt end to end. Exactly one request is made.
    pub async fn login<T: LoginTransport>(
        &self,
        gateway: &AuthGateway<T>,
        slot: &impl AuthSlot,
        credentials: &Credentials,
    ) -> LoginOutcome {
        let Applied::Dispatched(attempt) = self.dispatch(slot, AuthEvent::LoginDispatched) else {
            return LoginOutcome::AlreadyAuthenticated;
        };
        log::info!("login attempt {} dispatched", attempt.0);

        match gateway.login(credentials).await {
            Ok(session) => match self.dispatch(slot, AuthEvent::LoginSucceeded { attempt, session }) {
                Applied::Persist(session) => {
                    log::info!("login attempt {} authenticated as {}", attempt.0, session.role);
                    LoginOutcome::Authenticated
                }
                _ => {
                    log::warn!("dropping response for superseded login attempt {}", attempt.0);
                    LoginOutcome::Superseded
                }
            },
            Err(err) => {
                log::error!("login attempt {} failed: {err}", attempt.0);
                let message = err.user_message();
                match self.dispatch(slot, AuthEvent::LoginFailed { attempt, message: message.clone() }) {
                    Applied::Failed => LoginOutcome::Failed(message),
                    _ => {
                        log::warn!("dropping failure for superseded login attempt {}", attempt.0);
                        LoginOutcome::Superseded
                    }
                }
            }
        }
    }
}
