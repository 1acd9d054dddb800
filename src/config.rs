// ============================================================================
// CONFIG - Configuración de la aplicación (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    /// ID del elemento donde se monta la SPA
    pub mount_element_id: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Monta la página NotFound como catch-all en la raíz
    pub not_found_page: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Gana Laundry".to_string(),
            mount_element_id: "root".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            not_found_page: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_name: option_env!("APP_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.app_name),
            mount_element_id: option_env!("MOUNT_ELEMENT_ID")
                .map(str::to_string)
                .unwrap_or(defaults.mount_element_id),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            not_found_page: option_env!("NOT_FOUND_PAGE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.not_found_page),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log; valores inválidos caen a `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
