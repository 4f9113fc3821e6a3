use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::config::{ApiConfig, SESSION_STORAGE_KEY};
use crate::net::transport::fake::ScriptedTransport;
use crate::net::transport::{HttpReply, TransportError};
use crate::net::types::{Role, Session};
use crate::state::auth::{AuthPhase, AuthState};
use crate::util::session_store::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn ok_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "_id": "1",
            "fullName": "A B",
            "email": "a@b.com",
            "role": "admin",
            "state": true,
            "token": "t1"
        }
    })
}

fn expected_session() -> Session {
    Session {
        id: "1".to_owned(),
        full_name: "A B".to_owned(),
        email: "a@b.com".to_owned(),
        role: Role::Admin,
        state: true,
        image: None,
        token: "t1".to_owned(),
    }
}

fn previous_session() -> Session {
    Session { token: "old".to_owned(), role: Role::Attendant, ..expected_session() }
}

fn controller() -> SessionController<MemoryStorage> {
    SessionController::new(CredentialStore::new(MemoryStorage::default()))
}

/// Slot as the app holds it once startup restore has run.
fn restored_slot(ctl: &SessionController<MemoryStorage>) -> RefCell<AuthState> {
    let slot = RefCell::new(AuthState::restoring());
    ctl.restore(&slot);
    slot
}

fn gateway<T: LoginTransport>(transport: T) -> AuthGateway<T> {
    AuthGateway::new(ApiConfig::from_raw(Some("http://api.test")), transport)
}

/// Runs a side effect on the auth slot while the request is "in flight".
struct InterleavingTransport {
    slot: Rc<RefCell<AuthState>>,
    during: fn(&RefCell<AuthState>),
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for InterleavingTransport {
    async fn post_json(&self, _url: &str, _body: &serde_json::Value) -> Result<HttpReply, TransportError> {
        (self.during)(&self.slot);
        Ok(HttpReply { status: 200, body: ok_body().to_string() })
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn restore_publishes_persisted_session() {
    let ctl = controller();
    ctl.store().save(&expected_session()).unwrap();
    let slot = RefCell::new(AuthState::restoring());

    assert_eq!(ctl.restore(&slot), Applied::Restored);

    let state = slot.snapshot();
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.session, Some(expected_session()));
}

#[test]
fn restore_with_empty_store_is_anonymous() {
    let ctl = controller();
    let slot = restored_slot(&ctl);
    assert_eq!(slot.snapshot().phase(), AuthPhase::Anonymous);
}

#[test]
fn restore_with_corrupt_store_is_anonymous() {
    let backend = MemoryStorage::default();
    backend.set_item(SESSION_STORAGE_KEY, "{{{").unwrap();
    let ctl = SessionController::new(CredentialStore::new(backend));
    let slot = restored_slot(&ctl);
    assert_eq!(slot.snapshot().phase(), AuthPhase::Anonymous);
}

#[test]
fn restore_runs_only_once() {
    let ctl = controller();
    let slot = restored_slot(&ctl);
    ctl.store().save(&expected_session()).unwrap();

    assert_eq!(ctl.restore(&slot), Applied::Ignored);
    assert_eq!(slot.snapshot().session, None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn successful_login_authenticates_and_persists() {
    let ctl = controller();
    let slot = restored_slot(&ctl);
    let gw = gateway(ScriptedTransport::replying(200, ok_body()));

    let outcome = block_on(ctl.login(&gw, &slot, &creds()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    let state = slot.snapshot();
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.session.as_ref().map(|s| s.token.as_str()), Some("t1"));
    assert_eq!(ctl.store().load(), Some(expected_session()));
}

#[test]
fn rejected_login_stays_anonymous_and_leaves_store_untouched() {
    let ctl = controller();
    let slot = RefCell::new(AuthState::default());
    let gw = gateway(ScriptedTransport::replying(401, serde_json::json!({ "message": "bad credentials" })));

    let outcome = block_on(ctl.login(&gw, &slot, &creds()));

    assert_eq!(outcome, LoginOutcome::Failed("bad credentials".to_owned()));
    let state = slot.snapshot();
    assert_eq!(state.phase(), AuthPhase::Anonymous);
    assert_eq!(state.error.as_deref(), Some("bad credentials"));
    assert_eq!(ctl.store().read_raw(), None);
}

#[test]
fn rejected_login_keeps_prior_store_contents() {
    let ctl = controller();
    ctl.store().save(&previous_session()).unwrap();
    let before = ctl.store().read_raw();
    // Anonymous in memory even though the store holds a blob.
    let slot = RefCell::new(AuthState::default());
    let gw = gateway(ScriptedTransport::replying(401, serde_json::json!({ "message": "bad credentials" })));

    block_on(ctl.login(&gw, &slot, &creds()));

    assert_eq!(ctl.store().read_raw(), before);
}

#[test]
fn transport_failure_surfaces_transport_message() {
    let ctl = controller();
    let slot = RefCell::new(AuthState::default());
    let gw = gateway(ScriptedTransport::failing("Network Error"));

    let outcome = block_on(ctl.login(&gw, &slot, &creds()));

    assert_eq!(outcome, LoginOutcome::Failed("Network Error".to_owned()));
    assert!(!slot.snapshot().loading);
}

#[test]
fn login_while_authenticated_makes_no_request() {
    let ctl = controller();
    let slot = RefCell::new(AuthState::restored(Some(previous_session())));
    let gw = gateway(ScriptedTransport::replying(200, ok_body()));

    let outcome = block_on(ctl.login(&gw, &slot, &creds()));

    assert_eq!(outcome, LoginOutcome::AlreadyAuthenticated);
    assert!(gw.transport().requests.borrow().is_empty());
    assert_eq!(slot.snapshot().session, Some(previous_session()));
}

// =============================================================
// Superseded attempts
// =============================================================

#[test]
fn logout_during_login_drops_the_late_session() {
    let ctl = controller();
    let slot = Rc::new(RefCell::new(AuthState::default()));
    let transport = InterleavingTransport {
        slot: slot.clone(),
        during: |s| {
            s.update_auth(|state| {
                state.apply(AuthEvent::Logout);
            });
        },
    };
    let gw = gateway(transport);

    let outcome = block_on(ctl.login(&gw, &*slot, &creds()));

    assert_eq!(outcome, LoginOutcome::Superseded);
    assert_eq!(slot.snapshot().phase(), AuthPhase::Anonymous);
    assert_eq!(ctl.store().read_raw(), None);
}

#[test]
fn newer_dispatch_supersedes_in_flight_attempt() {
    let ctl = controller();
    let slot = Rc::new(RefCell::new(AuthState::default()));
    let transport = InterleavingTransport {
        slot: slot.clone(),
        during: |s| {
            s.update_auth(|state| {
                state.apply(AuthEvent::LoginDispatched);
            });
        },
    };
    let gw = gateway(transport);

    let outcome = block_on(ctl.login(&gw, &*slot, &creds()));

    assert_eq!(outcome, LoginOutcome::Superseded);
    let state = slot.snapshot();
    assert_eq!(state.phase(), AuthPhase::Authenticating);
    assert_eq!(state.attempt, 2);
    assert_eq!(ctl.store().read_raw(), None);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_memory_and_store() {
    let ctl = controller();
    ctl.store().save(&expected_session()).unwrap();
    let slot = restored_slot(&ctl);

    ctl.logout(&slot);

    assert_eq!(slot.snapshot().phase(), AuthPhase::Anonymous);
    assert_eq!(ctl.store().load(), None);
}

#[test]
fn logout_is_idempotent() {
    let ctl = controller();
    ctl.store().save(&expected_session()).unwrap();
    let slot = restored_slot(&ctl);

    ctl.logout(&slot);
    let once = slot.snapshot();
    ctl.logout(&slot);
    let twice = slot.snapshot();

    // The attempt counter keeps moving; everything observable stays put.
    assert_eq!(twice.attempt, once.attempt + 1);
    assert_eq!(AuthState { attempt: 0, ..twice }, AuthState { attempt: 0, ..once });
    assert_eq!(ctl.store().read_raw(), None);
}
