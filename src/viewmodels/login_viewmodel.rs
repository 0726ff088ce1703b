// ============================================================================
// LOGIN VIEWMODEL - Controlador de envío de credenciales
// ============================================================================
// validar -> enviar -> interpretar respuesta -> transición de estado
// Los colaboradores externos (auth, navegación) se inyectan
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{Credentials, Field, SubmissionOutcome, ValidationResult};
use crate::services::{login_with, AuthService, Navigator};
use crate::state::{FormState, ReactiveState};
use crate::viewmodels::validator::{validate, validated_credentials};

/// ViewModel del formulario de login
pub struct LoginViewModel {
    auth_service: Rc<dyn AuthService>,
    navigator: Rc<dyn Navigator>,
    state: Rc<ReactiveState<FormState>>,
    home_path: String,
}

impl LoginViewModel {
    pub fn new(auth_service: Rc<dyn AuthService>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            auth_service,
            navigator,
            state: Rc::new(ReactiveState::new(FormState::new())),
            home_path: CONFIG.home_path.clone(),
        }
    }

    pub fn with_home_path(mut self, home_path: impl Into<String>) -> Self {
        self.home_path = home_path.into();
        self
    }

    /// Contenedor reactivo para que la vista se suscriba
    pub fn state(&self) -> Rc<ReactiveState<FormState>> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.snapshot()
    }

    /// Cambio de un campo: se re-valida en el acto
    pub fn change_field(&self, field: Field, value: String) {
        self.state.update(|state| {
            state.credentials.set(field, value);
            state.touched.insert(field);
            state.validation = validate(&state.credentials).restricted_to(&state.touched);
        });
    }

    /// Envío desde el formulario. Devuelve `None` si no se llegó a llamar al servicio
    /// (envío en curso o errores de validación).
    pub async fn submit_form(&self) -> Option<SubmissionOutcome> {
        if self.state.with(|state| state.pending) {
            log::warn!("⚠️ Envío ignorado: ya hay una petición en curso");
            return None;
        }

        let candidate = self.state.with(|state| state.credentials.clone());
        let credentials = match validated_credentials(&candidate) {
            Ok(credentials) => credentials,
            Err(errors) => {
                log::info!(
                    "📝 Envío bloqueado por validación: {:?}",
                    errors.fields().map(|f| f.name()).collect::<Vec<_>>()
                );
                self.state.update(|state| {
                    state.touch_all();
                    state.validation = errors;
                });
                return None;
            }
        };

        self.state.update(|state| {
            state.touch_all();
            state.validation = ValidationResult::new();
        });

        Some(self.submit(credentials).await)
    }

    /// Enviar credenciales ya validadas y registrar exactamente un resultado
    pub async fn submit(&self, credentials: Credentials) -> SubmissionOutcome {
        self.state.update(|state| {
            state.pending = true;
            state.error_message = None;
            state.outcome = None;
        });

        log::info!("🔐 Enviando credenciales al servicio de autenticación...");
        let reply = login_with(self.auth_service.as_ref(), &credentials).await;
        drop(credentials);

        match &reply {
            Ok(Some(response)) => log::info!("📨 Respuesta de autenticación: HTTP {}", response.status),
            Ok(None) => log::warn!("⚠️ El servicio de autenticación no devolvió respuesta"),
            Err(e) => log::error!("❌ Error en login: {}", e),
        }

        let outcome = SubmissionOutcome::from_reply(&reply);
        match outcome {
            SubmissionOutcome::Success => {
                log::info!("✅ Login exitoso");
                // El formulario queda bloqueado (pending) hasta que el navegador cambie de página
                self.state.update(|state| state.outcome = Some(outcome));
                self.navigator.redirect(&self.home_path);
            }
            SubmissionOutcome::InvalidCredentials | SubmissionOutcome::UnknownError => {
                self.state.update(|state| {
                    state.outcome = Some(outcome);
                    state.error_message = outcome.message().map(str::to_string);
                    state.pending = false;
                });
            }
        }

        outcome
    }
}
