#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn login_endpoint_is_origin_relative() {
    assert_eq!(AUTH_LOGIN_ENDPOINT, "/api/auth/login");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn auth_payload_deserializes_backend_shape() {
    let json = r#"{
        "session_id": "20240101abcdef",
        "login_name": "A21EC0001",
        "full_name": "JANE DOE",
        "description": "Student",
        "user_role": "student"
    }"#;
    let payload: AuthPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.session_id, "20240101abcdef");
    assert_eq!(payload.login_name, "A21EC0001");
    assert_eq!(payload.full_name, "JANE DOE");
    assert_eq!(payload.description, "Student");
    assert_eq!(payload.user_role, "student");
}

#[test]
fn auth_payload_rejects_missing_session_id() {
    let json = r#"{
        "login_name": "A21EC0001",
        "full_name": "JANE DOE",
        "description": "Student",
        "user_role": "student"
    }"#;
    assert!(serde_json::from_str::<AuthPayload>(json).is_err());
}
