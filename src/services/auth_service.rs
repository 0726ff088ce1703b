// ============================================================================
// AUTH SERVICE - SOLO comunicación HTTP con el servicio de autenticación
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use crate::config::CONFIG;
use crate::errors::AuthError;
use crate::models::{AuthReply, AuthResponse, Credentials};

/// Colaborador externo que verifica credenciales.
/// Se inyecta en el controlador para poder sustituirlo en tests.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, username: &str, password: &str) -> AuthReply;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Cliente HTTP del endpoint de login (stateless)
#[derive(Clone)]
pub struct HttpAuthService {
    login_url: String,
}

impl HttpAuthService {
    pub fn new() -> Self {
        Self::with_url(CONFIG.login_url())
    }

    pub fn with_url(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl Default for HttpAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, username: &str, password: &str) -> AuthReply {
        let body = LoginRequest { username, password };

        let response = Request::post(&self.login_url)
            .json(&body)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        // Una respuesta opaca (status 0) no aporta nada que clasificar
        let status = response.status();
        if status == 0 {
            log::warn!("⚠️ Respuesta opaca del servicio de autenticación");
            return Ok(None);
        }

        Ok(Some(AuthResponse::new(status)))
    }
}

/// Atajo para enviar credenciales ya validadas
pub async fn login_with<S: AuthService + ?Sized>(service: &S, credentials: &Credentials) -> AuthReply {
    service.login(&credentials.username, &credentials.password).await
}
