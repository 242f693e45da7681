//! Wire DTOs for the authentication endpoint.
//!
//! DESIGN
//! ======
//! Reply fields are optional on the wire and validated in one place
//! ([`LoginReply::into_grant`]) so a half-filled 2xx body can never reach the
//! session repository.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{LoginError, SessionErrorKind};
use crate::state::permissions::{PermissionEntry, null_as_empty};
use crate::state::session::{Session, SessionRecord};

/// How the user identifies themselves: e-mail address or national id number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginIdentifier {
    Email(String),
    Dni(String),
}

impl LoginIdentifier {
    /// Anything containing `@` is treated as an e-mail address. A DNI may be
    /// typed with thousands dots (`30.111.222`); they are dropped here.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.contains('@') {
            Self::Email(value.to_owned())
        } else {
            Self::Dni(value.chars().filter(|c| *c != '.').collect())
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(flatten)]
    pub identifier: LoginIdentifier,
    pub password: String,
}

/// Raw 2xx body of `POST /login`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    pub token: Option<String>,
    pub role: Option<String>,
    pub user_name: Option<String>,
    #[serde(default, alias = "permissions", deserialize_with = "null_as_empty")]
    pub permisos: Vec<PermissionEntry>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub persona_id: Option<String>,
    pub foto: Option<String>,
}

/// A validated login: everything needed to commit the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub record: SessionRecord,
    pub persona_id: Option<String>,
    pub photo: Option<String>,
}

impl LoginReply {
    /// Require token, role and user name together.
    ///
    /// # Errors
    ///
    /// Returns an `Unknown` login error when any of the three is missing or empty.
    pub fn into_grant(self) -> Result<LoginGrant, LoginError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        let (Some(token), Some(role), Some(user_name)) =
            (non_empty(self.token), non_empty(self.role), non_empty(self.user_name))
        else {
            leptos::logging::warn!("login reply missing token, role or userName");
            return Err(LoginError::of_kind(SessionErrorKind::Unknown));
        };
        Ok(LoginGrant {
            record: SessionRecord {
                session: Session { token, role, user_name },
                menu: self.permisos,
            },
            persona_id: self.persona_id,
            photo: self.foto,
        })
    }
}

/// Error body returned with 4xx/5xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Accept ids sent either as strings or as JSON numbers.
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
