//! Locale code: the identifier used to select a translation table.
//!
//! A `LocaleCode` is a thin, owned wrapper around a culture name such as
//! `"en-US"` or `"zh-CN"`. It is deliberately not validated: any file name
//! in the translations directory is a candidate code, and malformed ones only
//! fail when their table is loaded.

use std::fmt;

/// Sentinel meaning "use the host's current UI culture".
pub const SYSTEM: &str = "System";

/// The locale whose table is embedded in the binary.
pub const COMPILED_IN: &str = "zh-CN";

/// The locale that needs no table (identity translation).
pub const BASELINE: &str = "en-US";

/// A locale identifier such as `"en-US"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode {
    code: String,
}

impl LocaleCode {
    /// Create a locale code from any string. No well-formedness check is made.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The `"System"` sentinel.
    pub fn system() -> Self {
        Self::new(SYSTEM)
    }

    /// The baseline locale (`"en-US"`).
    pub fn baseline() -> Self {
        Self::new(BASELINE)
    }

    /// The compiled-in locale (`"zh-CN"`).
    pub fn compiled_in() -> Self {
        Self::new(COMPILED_IN)
    }

    /// Get the raw code string.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Check if this is the `"System"` sentinel.
    pub fn is_system(&self) -> bool {
        self.code == SYSTEM
    }

    /// Check if this is the baseline locale.
    pub fn is_baseline(&self) -> bool {
        self.code == BASELINE
    }

    /// Check if this is the compiled-in locale.
    pub fn is_compiled_in(&self) -> bool {
        self.code == COMPILED_IN
    }

    /// Get the language family: the part before the first `-`.
    ///
    /// Codes without a separator have an empty family, so two such codes
    /// (e.g. `"fr"` and `"README"`) are considered the same family.
    ///
    /// # Example
    /// ```
    /// use ui_locale::i18n::LocaleCode;
    ///
    /// assert_eq!(LocaleCode::new("fr-CA").language_family(), "fr");
    /// assert_eq!(LocaleCode::new("fr").language_family(), "");
    /// ```
    pub fn language_family(&self) -> &str {
        self.code
            .split_once('-')
            .map(|(language, _)| language)
            .unwrap_or("")
    }

    /// Check if two codes share a language family.
    pub fn same_family(&self, other: &LocaleCode) -> bool {
        self.language_family() == other.language_family()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}
