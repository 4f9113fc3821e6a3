use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session() -> Session {
    Session {
        id: "1".to_owned(),
        full_name: "A B".to_owned(),
        email: "a@b.com".to_owned(),
        role: Role::Admin,
        state: true,
        image: Some(SessionImage {
            base_url: "https://cdn.example.test".to_owned(),
            url: "https://cdn.example.test/a.png".to_owned(),
        }),
        token: "t1".to_owned(),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Attendant).unwrap(), "\"attendant\"");
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"grosser\"").is_err());
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(Role::Attendant.to_string(), "attendant");
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_uses_api_field_names() {
    let value = serde_json::to_value(make_session()).unwrap();
    assert_eq!(value["_id"], "1");
    assert_eq!(value["fullName"], "A B");
    assert_eq!(value["image"]["baseUrl"], "https://cdn.example.test");
    assert_eq!(value["token"], "t1");
}

#[test]
fn session_without_image_field_deserializes() {
    let raw = r#"{"_id":"1","fullName":"A B","email":"a@b.com","role":"attendant","state":false,"token":"t"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.image, None);
    assert_eq!(session.role, Role::Attendant);
    assert!(!session.state);
}

// =============================================================
// Login envelope
// =============================================================

#[test]
fn login_envelope_maps_into_session() {
    let raw = r#"{"data":{"_id":"1","fullName":"A B","email":"a@b.com","role":"admin","state":true,"token":"t1"}}"#;
    let envelope: LoginEnvelope = serde_json::from_str(raw).unwrap();
    let session = Session::from(envelope.data);
    assert_eq!(session.id, "1");
    assert_eq!(session.token, "t1");
    assert_eq!(session.image, None);
}

#[test]
fn login_envelope_accepts_null_image() {
    let raw = r#"{"data":{"_id":"1","fullName":"A","email":"a@b.com","image":null,"role":"admin","state":true,"token":"t"}}"#;
    let envelope: LoginEnvelope = serde_json::from_str(raw).unwrap();
    assert!(envelope.data.image.is_none());
}

#[test]
fn login_envelope_ignores_extra_fields() {
    let raw = r#"{"data":{"_id":"1","fullName":"A","email":"a@b.com","role":"admin","state":true,"token":"t","verifyToken":"x"},"ok":true}"#;
    assert!(serde_json::from_str::<LoginEnvelope>(raw).is_ok());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn credentials_serialize_as_login_body() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "x" })
    );
}

#[test]
fn collection_envelope_defaults_to_empty() {
    let body: CollectionEnvelope = serde_json::from_str("{}").unwrap();
    assert!(body.data.is_empty());
}
