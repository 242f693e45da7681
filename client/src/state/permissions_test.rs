use super::*;

fn tree() -> Vec<PermissionEntry> {
    vec![
        PermissionEntry::new("Usuarios", &["Lista de Usuarios", "Registrar Usuario"]),
        PermissionEntry::new("Reservas", &[]),
    ]
}

// =============================================================
// Flattening
// =============================================================

#[test]
fn from_tree_collects_top_level_and_submenu_names() {
    let set = PermissionSet::from_tree(&tree());
    assert_eq!(set.len(), 4);
    assert!(set.allows("Usuarios"));
    assert!(set.allows("Lista de Usuarios"));
    assert!(set.allows("Registrar Usuario"));
    assert!(set.allows("Reservas"));
}

#[test]
fn from_empty_tree_allows_nothing() {
    let set = PermissionSet::from_tree(&[]);
    assert!(set.is_empty());
    assert!(!set.allows("Reservas"));
}

#[test]
fn duplicate_names_collapse() {
    let set = PermissionSet::from_tree(&[
        PermissionEntry::new("Paquetes", &["Paquetes"]),
        PermissionEntry::new("Paquetes", &[]),
    ]);
    assert_eq!(set.len(), 1);
}

// =============================================================
// Matching
// =============================================================

#[test]
fn allows_is_case_sensitive() {
    let set = PermissionSet::from_tree(&tree());
    assert!(!set.allows("reservas"));
    assert!(!set.allows("RESERVAS"));
}

#[test]
fn allows_requires_exact_match() {
    let set = PermissionSet::from_tree(&tree());
    assert!(!set.allows("Lista de"));
    assert!(!set.allows("Reservas "));
    assert!(!set.allows("Nonexistent"));
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn entry_deserializes_without_submenus() {
    let entry: PermissionEntry = serde_json::from_str(r#"{"nombre":"Reservas"}"#).unwrap();
    assert_eq!(entry, PermissionEntry::new("Reservas", &[]));
}

#[test]
fn entry_deserializes_null_submenus_as_empty() {
    let entry: PermissionEntry = serde_json::from_str(r#"{"nombre":"Reservas","submenus":null}"#).unwrap();
    assert_eq!(entry, PermissionEntry::new("Reservas", &[]));
}

#[test]
fn entry_deserializes_nested_submenus() {
    let raw = r#"{"nombre":"Usuarios","submenus":[{"nombre":"Lista de Usuarios"}]}"#;
    let entry: PermissionEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.submenus.len(), 1);
    assert_eq!(entry.submenus[0].nombre, "Lista de Usuarios");
}
