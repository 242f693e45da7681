//! Closed error types for the HTTP boundary.
//!
//! ERROR HANDLING
//! ==============
//! Server error codes are mapped to [`SessionErrorKind`] as soon as a reply is
//! read, so pages match on an enum instead of free-form strings. The message
//! carried by a [`LoginError`] is always safe to show on the login form.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a login attempt was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionErrorKind {
    UserNotFound,
    AccountLocked,
    InvalidCredentials,
    /// Missing or malformed fields.
    Validation,
    /// The request never produced an HTTP reply.
    Network,
    Unknown,
}

impl SessionErrorKind {
    /// Map a server-provided `code` field.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USER_NOT_FOUND" => Some(Self::UserNotFound),
            "ACCOUNT_LOCKED" => Some(Self::AccountLocked),
            "INVALID_PASSWORD" | "INVALID_CREDENTIALS" => Some(Self::InvalidCredentials),
            "VALIDATION_ERROR" => Some(Self::Validation),
            _ => None,
        }
    }

    /// Fallback when the reply carries no recognizable code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::InvalidCredentials,
            403 | 423 => Self::AccountLocked,
            404 => Self::UserNotFound,
            _ => Self::Unknown,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::UserNotFound => "Usuario no encontrado.",
            Self::AccountLocked => "La cuenta está bloqueada. Contacte a la administración.",
            Self::InvalidCredentials => "Contraseña incorrecta.",
            Self::Validation => "Complete todos los campos requeridos.",
            Self::Network => "No se pudo conectar con el servidor. Intente nuevamente.",
            Self::Unknown => "Error al iniciar sesión.",
        }
    }
}

/// A rejected login. Nothing is persisted when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoginError {
    pub kind: SessionErrorKind,
    pub message: String,
}

impl LoginError {
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Error carrying the kind's default user-facing message.
    pub fn of_kind(kind: SessionErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }
}

/// Failure of an authenticated API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401; the session has already been expired.
    #[error("session expired")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// The transport could not complete the request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);
