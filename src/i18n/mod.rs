//! Internationalization (i18n): locale selection, table loading and translation.
//!
//! # Architecture
//!
//! - `locale`: `LocaleCode` and the fixed `"System"`, compiled-in and baseline codes
//! - `registry`: available locales and raw table text (embedded or on disk)
//! - `culture`: host UI culture, used to resolve `"System"`
//! - `store`: `TranslationStore`, which owns the active locale and table
//! - `token`: string-or-value tokens for composing phrases
//! - `format`: `{0}`-style positional substitution
//! - `validator`: advisory checks on loaded tables
//! - `metrics`: lookup and load counters
//!
//! # Example
//!
//! ```rust,no_run
//! use ui_locale::i18n::{LocaleRegistry, TranslationStore};
//! use ui_locale::tr;
//!
//! let mut store = TranslationStore::new(LocaleRegistry::default());
//! store.load("System");
//!
//! let status = tr!(store, "Servers", ": ", 3);
//! let summary = store.translate_format("{0} item(s)", &[5.into()]);
//! ```

mod culture;
mod error;
mod format;
mod locale;
mod metrics;
mod registry;
mod store;
mod token;
mod validator;

pub use culture::{normalize_culture, FixedCulture, HostCulture, SystemCulture};
pub use error::LoadError;
pub use format::{format_positional, placeholders};
pub use locale::{LocaleCode, BASELINE, COMPILED_IN, SYSTEM};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleRegistry, DEFAULT_TRANSLATIONS_DIR};
pub use store::{decode_table, TranslationStore};
pub use token::Token;
pub use validator::{TranslationValidator, ValidationReport};

/// Translate a mixed list of keys and values with a `TranslationStore`.
///
/// `tr!(store, "Hello", " ", 42)` is `store.translate(&["Hello".into(), " ".into(), 42.into()])`.
#[macro_export]
macro_rules! tr {
    ($store:expr, $($token:expr),+ $(,)?) => {
        $store.translate(&[$($crate::i18n::Token::from($token)),+])
    };
}

/// Translate a format string and its arguments with a `TranslationStore`.
///
/// `tr_format!(store, "{0} item(s)", 5)` is `store.translate_format("{0} item(s)", &[5.into()])`.
#[macro_export]
macro_rules! tr_format {
    ($store:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $store.translate_format($format, &[$($crate::i18n::Token::from($arg)),*])
    };
}
