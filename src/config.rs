use serde::{Deserialize, Serialize};

use crate::utils::constants::BACKEND_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub auth_login_path: String,
    pub home_path: String,
    pub register_path: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            auth_login_path: "/auth/login".to_string(),
            home_path: "/".to_string(),
            register_path: "/register".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: BACKEND_URL.to_string(),
            auth_login_path: option_env!("AUTH_LOGIN_PATH")
                .map(|s| s.to_string())
                .unwrap_or(defaults.auth_login_path),
            home_path: option_env!("HOME_PATH")
                .map(|s| s.to_string())
                .unwrap_or(defaults.home_path),
            register_path: option_env!("REGISTER_PATH")
                .map(|s| s.to_string())
                .unwrap_or(defaults.register_path),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// URL completa del endpoint de login
    pub fn login_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_url.trim_end_matches('/'),
            self.auth_login_path
        )
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_without_double_slash() {
        let config = AppConfig {
            backend_url: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.login_url(), "https://api.example.com/auth/login");
    }

    #[test]
    fn defaults_point_home_and_register() {
        let config = AppConfig::default();
        assert_eq!(config.home_path, "/");
        assert_eq!(config.register_path, "/register");
        assert!(!config.is_production());
    }

    #[test]
    fn disabled_logging_only_keeps_warnings() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
