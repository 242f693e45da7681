use super::*;

#[test]
fn from_code_maps_known_server_codes() {
    assert_eq!(SessionErrorKind::from_code("USER_NOT_FOUND"), Some(SessionErrorKind::UserNotFound));
    assert_eq!(SessionErrorKind::from_code("ACCOUNT_LOCKED"), Some(SessionErrorKind::AccountLocked));
    assert_eq!(
        SessionErrorKind::from_code("INVALID_PASSWORD"),
        Some(SessionErrorKind::InvalidCredentials)
    );
    assert_eq!(SessionErrorKind::from_code("VALIDATION_ERROR"), Some(SessionErrorKind::Validation));
}

#[test]
fn from_code_rejects_unknown_and_lowercase_codes() {
    assert_eq!(SessionErrorKind::from_code("invalid_password"), None);
    assert_eq!(SessionErrorKind::from_code("RATE_LIMITED"), None);
    assert_eq!(SessionErrorKind::from_code(""), None);
}

#[test]
fn from_status_fallbacks() {
    assert_eq!(SessionErrorKind::from_status(400), SessionErrorKind::Validation);
    assert_eq!(SessionErrorKind::from_status(422), SessionErrorKind::Validation);
    assert_eq!(SessionErrorKind::from_status(401), SessionErrorKind::InvalidCredentials);
    assert_eq!(SessionErrorKind::from_status(423), SessionErrorKind::AccountLocked);
    assert_eq!(SessionErrorKind::from_status(404), SessionErrorKind::UserNotFound);
    assert_eq!(SessionErrorKind::from_status(500), SessionErrorKind::Unknown);
}

#[test]
fn login_error_displays_its_message() {
    let err = LoginError::new(SessionErrorKind::InvalidCredentials, "bad");
    assert_eq!(err.to_string(), "bad");
}

#[test]
fn of_kind_uses_default_message() {
    let err = LoginError::of_kind(SessionErrorKind::Network);
    assert_eq!(err.message, SessionErrorKind::Network.default_message());
}

#[test]
fn api_error_display() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    assert_eq!(
        ApiError::Status { status: 503, message: None }.to_string(),
        "request failed with status 503"
    );
}
