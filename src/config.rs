use crate::i18n::{DEFAULT_TRANSLATIONS_DIR, SYSTEM};
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Requested locale code, or "System" for the host culture
    pub language: String,

    /// Directory holding one JSON table per locale, named after the locale code
    pub translations_dir: PathBuf,

    /// Whether loaded tables are validated and findings logged
    pub validate_tables: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            language: std::env::var("UI_LOCALE_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| SYSTEM.to_string()),
            translations_dir: std::env::var("UI_LOCALE_TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TRANSLATIONS_DIR)),
            validate_tables: match std::env::var("UI_LOCALE_VALIDATE") {
                Ok(v) => parse_bool(&v)?,
                Err(_) => true,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: SYSTEM.to_string(),
            translations_dir: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
            validate_tables: true,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("UI_LOCALE_VALIDATE must be true or false, got '{}'", other),
    }
}
