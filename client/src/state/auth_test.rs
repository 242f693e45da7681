use futures::executor::block_on;

use super::*;
use crate::net::error::SessionErrorKind;
use crate::net::testing::ScriptedTransport;
use crate::state::session::MemoryStore;

fn api(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new("/api", transport)
}

fn full_store() -> MemoryStore {
    MemoryStore::with_entries(&[("token", "abc"), ("role", "admin"), ("userName", "Ana")])
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(state.user_name(), None);
}

#[test]
fn signed_out_is_not_loading() {
    let state = AuthState::signed_out();
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

// =============================================================
// validate_session
// =============================================================

#[test]
fn no_token_bootstrap_is_anonymous_and_loaded() {
    let mut manager = SessionManager::new(MemoryStore::default());
    let state = manager.validate_session();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.user_role(), None);
}

#[test]
fn corrupt_session_is_cleared() {
    let store = MemoryStore::with_entries(&[("token", "abc")]);
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    assert_eq!(store.get("token"), None);
    assert!(!manager.state().is_authenticated());
    assert!(!manager.state().is_loading());
}

#[test]
fn full_session_bootstrap_is_authenticated() {
    let mut manager = SessionManager::new(full_store());
    let state = manager.validate_session();
    assert!(state.is_authenticated());
    assert_eq!(state.user_name(), Some("Ana"));
    assert_eq!(state.user_role(), Some("admin"));
    assert_eq!(state.phase, AuthPhase::Authenticated(state.session().unwrap().clone()));
}

#[test]
fn bootstrap_rebuilds_permissions_and_user_id() {
    let store = full_store();
    store.set("permisos", r#"[{"nombre":"Usuarios","submenus":[{"nombre":"Lista de Usuarios"}]}]"#);
    store.set("personaId", "17");
    let mut manager = SessionManager::new(store);
    let state = manager.validate_session();
    assert!(state.has_permission("Lista de Usuarios"));
    assert_eq!(state.user_id.as_deref(), Some("17"));
}

#[test]
fn validate_session_runs_only_once() {
    let store = MemoryStore::default();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    store.set("token", "late");
    store.set("role", "admin");
    store.set("userName", "Ana");
    assert!(!manager.validate_session().is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_exactly_the_three_values() {
    let store = MemoryStore::default();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    let api = api(ScriptedTransport::default().reply(200, r#"{"token":"t1","role":"r1","userName":"u1"}"#));

    block_on(manager.login(&api, "x", "y")).unwrap();

    assert_eq!(store.get("token").as_deref(), Some("t1"));
    assert_eq!(store.get("role").as_deref(), Some("r1"));
    assert_eq!(store.get("userName").as_deref(), Some("u1"));
    assert!(manager.state().is_authenticated());
}

#[test]
fn login_failure_commits_nothing() {
    let store = MemoryStore::default();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    let api = api(ScriptedTransport::default().reply(400, r#"{"message":"bad","code":"INVALID_PASSWORD"}"#));

    let err = block_on(manager.login(&api, "x", "y")).unwrap_err();

    assert_eq!(err.kind, SessionErrorKind::InvalidCredentials);
    assert!(store.is_empty());
    assert!(!manager.state().is_authenticated());
}

#[test]
fn login_network_failure_commits_nothing() {
    let store = MemoryStore::default();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    let api = api(ScriptedTransport::default().fail("offline"));

    let err = block_on(manager.login(&api, "x", "y")).unwrap_err();

    assert_eq!(err.kind, SessionErrorKind::Network);
    assert!(store.is_empty());
}

#[test]
fn login_caches_convenience_fields_and_permissions() {
    let store = MemoryStore::default();
    let mut manager = SessionManager::new(store.clone());
    let body = r#"{"token":"t1","role":"r1","userName":"u1","personaId":9,"foto":"f.jpg",
                   "permisos":[{"nombre":"Reservas","submenus":[]}]}"#;
    let api = api(ScriptedTransport::default().reply(200, body));

    block_on(manager.login(&api, "x", "y")).unwrap();

    assert_eq!(store.get("personaId").as_deref(), Some("9"));
    assert_eq!(store.get("foto").as_deref(), Some("f.jpg"));
    assert!(manager.state().has_permission("Reservas"));
    assert_eq!(manager.state().user_id.as_deref(), Some("9"));
}

#[test]
fn login_redirect_fires_exactly_once() {
    let mut manager = SessionManager::new(MemoryStore::default());
    let api = api(ScriptedTransport::default().reply(200, r#"{"token":"t1","role":"r1","userName":"u1"}"#));
    block_on(manager.login(&api, "x", "y")).unwrap();

    assert!(matches!(manager.state().phase, AuthPhase::AuthenticatedJustNow(_)));
    assert!(manager.acknowledge_login());
    assert!(!manager.acknowledge_login());
    assert!(matches!(manager.state().phase, AuthPhase::Authenticated(_)));
}

#[test]
fn bootstrapped_session_has_no_pending_redirect() {
    let mut manager = SessionManager::new(full_store());
    manager.validate_session();
    assert!(!manager.acknowledge_login());
}

// =============================================================
// logout / expire
// =============================================================

#[test]
fn logout_clears_everything() {
    let store = full_store();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    assert!(manager.state().is_authenticated());

    manager.logout();

    assert_eq!(store.get("token"), None);
    assert_eq!(store.get("role"), None);
    assert_eq!(store.get("userName"), None);
    assert!(!manager.state().is_authenticated());
    assert!(!manager.state().is_loading());
}

#[test]
fn logout_when_signed_out_is_a_no_op() {
    let mut manager = SessionManager::new(MemoryStore::default());
    manager.logout();
    manager.logout();
    assert_eq!(manager.state(), &AuthState::signed_out());
}

#[test]
fn expire_matches_logout() {
    let store = full_store();
    let mut manager = SessionManager::new(store.clone());
    manager.validate_session();
    manager.expire();
    assert!(store.is_empty());
    assert!(!manager.state().is_authenticated());
}

#[test]
fn permissions_are_dropped_on_logout() {
    let mut manager = SessionManager::new(MemoryStore::default());
    let body = r#"{"token":"t","role":"r","userName":"u","permisos":[{"nombre":"Reservas"}]}"#;
    let api = api(ScriptedTransport::default().reply(200, body));
    block_on(manager.login(&api, "x", "y")).unwrap();
    manager.logout();
    assert!(!manager.state().has_permission("Reservas"));
    assert!(manager.state().menu.is_empty());
}
