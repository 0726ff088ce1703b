use thiserror::Error;

/// Fallos de transporte al hablar con el servicio de autenticación.
/// Nunca llegan a la UI: el controlador los convierte en `UnknownError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Request build error: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
}
