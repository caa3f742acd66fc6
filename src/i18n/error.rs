use crate::i18n::LocaleCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a translation table.
///
/// Neither variant is fatal: `TranslationStore::load` logs it and keeps the
/// previously active locale and table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The table file (or its directory) is missing or unreadable.
    #[error("translation resource for {locale} unavailable at {}: {source}", path.display())]
    ResourceUnavailable {
        locale: LocaleCode,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table text is not a flat JSON object of strings, or it is empty.
    #[error("malformed translation data for {locale}: {reason}")]
    MalformedTranslationData { locale: LocaleCode, reason: String },
}

impl LoadError {
    /// The locale whose table failed to load.
    pub fn locale(&self) -> &LocaleCode {
        match self {
            LoadError::ResourceUnavailable { locale, .. } => locale,
            LoadError::MalformedTranslationData { locale, .. } => locale,
        }
    }
}
