use super::*;
use crate::net::api::{LoginError, interpret_login_reply};

#[test]
fn readable_body_keeps_status_and_text() {
    let reply = reply_from_parts::<String>(401, Ok("{\"message\":\"bad credentials\"}".to_owned())).unwrap();
    assert_eq!(reply.status, 401);
    assert_eq!(interpret_login_reply(&reply).unwrap_err().user_message(), "bad credentials");
}

#[test]
fn unreadable_body_is_a_transport_error() {
    let err = reply_from_parts(401, Err("connection reset")).unwrap_err();
    assert_eq!(err, TransportError("reading response body: connection reset".to_owned()));
}

#[test]
fn truncated_rejection_surfaces_the_read_failure() {
    let err: LoginError = reply_from_parts(401, Err("connection reset")).unwrap_err().into();
    assert_eq!(err.user_message(), "reading response body: connection reset");
}
