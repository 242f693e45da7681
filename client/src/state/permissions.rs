//! Menu/permission tree returned by the login endpoint.
//!
//! DESIGN
//! ======
//! The server describes access as a tree of menus with nested submenus. Route
//! guards only ever ask "is this name present anywhere in the tree", so the
//! tree is flattened once into a set and membership is an exact string match.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A top-level menu the user may open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Display name, also the key matched against a route's required permission.
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub submenus: Vec<SubmenuEntry>,
}

/// A submenu nested under a [`PermissionEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuEntry {
    pub nombre: String,
}

impl PermissionEntry {
    pub fn new(nombre: impl Into<String>, submenus: &[&str]) -> Self {
        Self {
            nombre: nombre.into(),
            submenus: submenus
                .iter()
                .map(|name| SubmenuEntry { nombre: (*name).to_owned() })
                .collect(),
        }
    }
}

/// Read a list that the server may send as `null` when there is nothing in it.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flattened set of every menu and submenu name in a permission tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    names: HashSet<String>,
}

impl PermissionSet {
    /// Flatten a permission tree. Top-level and submenu names share one namespace.
    pub fn from_tree(tree: &[PermissionEntry]) -> Self {
        let mut names = HashSet::new();
        for entry in tree {
            names.insert(entry.nombre.clone());
            names.extend(entry.submenus.iter().map(|sub| sub.nombre.clone()));
        }
        Self { names }
    }

    /// Case-sensitive exact membership test.
    pub fn allows(&self, required: &str) -> bool {
        self.names.contains(required)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
