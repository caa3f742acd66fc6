//! Locale registry: where translation tables come from.
//!
//! The registry knows the fixed locales (the `"System"` sentinel, the
//! compiled-in table and the baseline) and enumerates the translations
//! directory for the rest. Nothing is cached: the directory is read again on
//! every call since it may change between runs.

use crate::i18n::{LoadError, LocaleCode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default translations directory, relative to the working directory.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "i18n";

/// The compiled-in translation table.
static COMPILED_IN_TABLE: &[u8] = include_bytes!("../../resources/zh-CN.json");

/// Source of available locales and their raw table text.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    translations_dir: PathBuf,
}

impl LocaleRegistry {
    /// Create a registry reading on-disk tables from `translations_dir`.
    pub fn new(translations_dir: impl Into<PathBuf>) -> Self {
        Self {
            translations_dir: translations_dir.into(),
        }
    }

    /// Get the translations directory.
    pub fn translations_dir(&self) -> &Path {
        &self.translations_dir
    }

    /// List every selectable locale, in order.
    ///
    /// Always starts with `"System"`, the compiled-in locale and the baseline,
    /// followed by each file name found in the translations directory. File
    /// names are not checked for well-formedness. A missing or unreadable
    /// directory contributes nothing.
    pub fn list_available(&self) -> Vec<LocaleCode> {
        let mut locales = vec![
            LocaleCode::system(),
            LocaleCode::compiled_in(),
            LocaleCode::baseline(),
        ];
        locales.extend(self.discover());
        locales
    }

    /// Locales a request can resolve to (`list_available` without `"System"`).
    pub fn loadable(&self) -> Vec<LocaleCode> {
        self.list_available().into_iter().skip(1).collect()
    }

    /// Enumerate file names in the translations directory, sorted by name.
    fn discover(&self) -> Vec<LocaleCode> {
        let entries = match fs::read_dir(&self.translations_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(
                    "No translations directory at {}: {}",
                    self.translations_dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        debug!(
            "Discovered {} translation file(s) in {}",
            names.len(),
            self.translations_dir.display()
        );

        names.into_iter().map(LocaleCode::new).collect()
    }

    /// Path of the on-disk table for `locale`.
    pub fn path_for(&self, locale: &LocaleCode) -> PathBuf {
        self.translations_dir.join(locale.as_str())
    }

    /// Read the raw table text for `locale`.
    ///
    /// The compiled-in locale is decoded from the embedded bytes; every other
    /// locale is read from the file named exactly after it. The baseline has
    /// no table and is not expected here.
    pub fn read_table_text(&self, locale: &LocaleCode) -> Result<String, LoadError> {
        if locale.is_compiled_in() {
            return String::from_utf8(COMPILED_IN_TABLE.to_vec()).map_err(|e| {
                LoadError::MalformedTranslationData {
                    locale: locale.clone(),
                    reason: format!("embedded table is not valid UTF-8: {}", e),
                }
            });
        }

        let path = self.path_for(locale);
        fs::read_to_string(&path).map_err(|source| LoadError::ResourceUnavailable {
            locale: locale.clone(),
            path,
            source,
        })
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSLATIONS_DIR)
    }
}
