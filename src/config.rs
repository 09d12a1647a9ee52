use std::env;
use log::warn;
use crate::models::RequiredPercentage;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Configuración del servidor. Se lee de `.env` (si existe) y luego del
/// entorno: `SMARTBUNK_BIND`, `SMARTBUNK_REQUIRED_PERCENTAGE`, `SMARTBUNK_STRICT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    /// Porcentaje usado cuando la solicitud no trae uno.
    pub required_percentage: RequiredPercentage,
    /// Si es true, las solicitudes pasan por `allocate_checked`.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            required_percentage: RequiredPercentage::default(),
            strict: true,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn from_env() -> Self {
        load_dotenv();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de un lookup arbitrario (tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(bind) = lookup("SMARTBUNK_BIND").filter(|s| !s.trim().is_empty()) {
            cfg.bind = bind.trim().to_string();
        }

        if let Some(raw) = lookup("SMARTBUNK_REQUIRED_PERCENTAGE") {
            match raw.trim().parse::<f64>().ok().map(RequiredPercentage::new) {
                Some(Ok(p)) => cfg.required_percentage = p,
                _ => warn!("ignoring SMARTBUNK_REQUIRED_PERCENTAGE={:?}: expected a number in (0, 1]", raw),
            }
        }

        if let Some(raw) = lookup("SMARTBUNK_STRICT") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => cfg.strict = true,
                "0" | "false" | "no" => cfg.strict = false,
                other => warn!("ignoring SMARTBUNK_STRICT={:?}", other),
            }
        }

        cfg
    }
}
