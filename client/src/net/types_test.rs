use super::*;
use crate::state::permissions::PermissionEntry;

#[test]
fn identifier_with_at_sign_is_email() {
    assert_eq!(
        LoginIdentifier::parse(" ana@edificio.com "),
        LoginIdentifier::Email("ana@edificio.com".to_owned())
    );
}

#[test]
fn identifier_without_at_sign_is_dni() {
    assert_eq!(LoginIdentifier::parse("30111222"), LoginIdentifier::Dni("30111222".to_owned()));
}

#[test]
fn dotted_dni_is_sent_as_digits() {
    assert_eq!(LoginIdentifier::parse(" 12.345.678 "), LoginIdentifier::Dni("12345678".to_owned()));
}

#[test]
fn login_request_serializes_flat_email_body() {
    let req = LoginRequest {
        identifier: LoginIdentifier::Email("a@b.com".to_owned()),
        password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "secret" })
    );
}

#[test]
fn login_request_serializes_flat_dni_body() {
    let req = LoginRequest {
        identifier: LoginIdentifier::Dni("30111222".to_owned()),
        password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "dni": "30111222", "password": "secret" })
    );
}

#[test]
fn reply_with_all_fields_becomes_grant() {
    let raw = r#"{
        "token": "t1", "role": "r1", "userName": "u1",
        "permisos": [{"nombre": "Reservas", "submenus": []}],
        "personaId": 42, "foto": "f.png"
    }"#;
    let reply: LoginReply = serde_json::from_str(raw).unwrap();
    let grant = reply.into_grant().unwrap();
    assert_eq!(grant.record.session.token, "t1");
    assert_eq!(grant.record.session.role, "r1");
    assert_eq!(grant.record.session.user_name, "u1");
    assert_eq!(grant.record.menu.len(), 1);
    assert_eq!(grant.persona_id.as_deref(), Some("42"));
    assert_eq!(grant.photo.as_deref(), Some("f.png"));
}

#[test]
fn reply_accepts_permissions_alias_and_string_persona_id() {
    let raw = r#"{"token":"t","role":"r","userName":"u","permissions":[{"nombre":"Paquetes"}],"personaId":"p-9"}"#;
    let grant = serde_json::from_str::<LoginReply>(raw).unwrap().into_grant().unwrap();
    assert_eq!(grant.record.menu[0].nombre, "Paquetes");
    assert_eq!(grant.persona_id.as_deref(), Some("p-9"));
}

#[test]
fn reply_with_null_permission_tree_is_granted_without_menus() {
    let raw = r#"{"token":"t","role":"r","userName":"u","permisos":null}"#;
    let grant = serde_json::from_str::<LoginReply>(raw).unwrap().into_grant().unwrap();
    assert_eq!(grant.record.session.token, "t");
    assert!(grant.record.menu.is_empty());
}

#[test]
fn reply_with_null_submenus_keeps_the_menu() {
    let raw = r#"{"token":"t","role":"r","userName":"u","permisos":[{"nombre":"Reservas","submenus":null}]}"#;
    let grant = serde_json::from_str::<LoginReply>(raw).unwrap().into_grant().unwrap();
    assert_eq!(grant.record.menu, vec![PermissionEntry::new("Reservas", &[])]);
}

#[test]
fn reply_missing_role_is_rejected() {
    let reply: LoginReply = serde_json::from_str(r#"{"token":"t","userName":"u"}"#).unwrap();
    let err = reply.into_grant().unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::Unknown);
}

#[test]
fn reply_with_empty_token_is_rejected() {
    let reply: LoginReply = serde_json::from_str(r#"{"token":"","role":"r","userName":"u"}"#).unwrap();
    assert!(reply.into_grant().is_err());
}

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
    assert_eq!(body.code, None);
}
