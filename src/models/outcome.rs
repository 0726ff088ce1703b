use serde::Deserialize;

use crate::errors::AuthError;
use crate::utils::constants::{INVALID_CREDENTIALS_MESSAGE, UNKNOWN_ERROR_MESSAGE};

pub const STATUS_OK: u16 = 200;
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Respuesta del servicio de autenticación (solo interesa el status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub status: u16,
}

impl AuthResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

/// Lo que devuelve el servicio: `Ok(None)` cuando no hubo respuesta utilizable
pub type AuthReply = Result<Option<AuthResponse>, AuthError>;

/// Resultado clasificado de un intento de envío
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    InvalidCredentials,
    UnknownError,
}

impl SubmissionOutcome {
    /// Clasificar la respuesta del servicio. Cualquier fallo de transporte,
    /// respuesta ausente o status inesperado termina en `UnknownError`.
    pub fn from_reply(reply: &AuthReply) -> Self {
        match reply {
            Ok(Some(response)) => Self::from_status(response.status),
            Ok(None) | Err(_) => Self::UnknownError,
        }
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            STATUS_UNAUTHORIZED => Self::InvalidCredentials,
            STATUS_OK => Self::Success,
            _ => Self::UnknownError,
        }
    }

    /// Mensaje del banner; `Success` no muestra nada porque la página se abandona
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::InvalidCredentials => Some(INVALID_CREDENTIALS_MESSAGE),
            Self::UnknownError => Some(UNKNOWN_ERROR_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
