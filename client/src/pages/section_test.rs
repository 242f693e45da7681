use super::*;

#[test]
fn unauthorized_has_no_message() {
    assert_eq!(list_error_message(&ApiError::Unauthorized), None);
}

#[test]
fn status_prefers_server_message() {
    let err = ApiError::Status { status: 500, message: Some("falló la base".to_owned()) };
    assert_eq!(list_error_message(&err).as_deref(), Some("falló la base"));
}

#[test]
fn status_without_message_reports_code() {
    let err = ApiError::Status { status: 503, message: None };
    assert_eq!(list_error_message(&err).as_deref(), Some("El servidor respondió 503."));
}

#[test]
fn network_and_decode_have_generic_messages() {
    assert!(list_error_message(&ApiError::Network("x".to_owned())).is_some());
    assert!(list_error_message(&ApiError::Decode("x".to_owned())).is_some());
}
