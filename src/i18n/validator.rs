//! Translation table validation.
//!
//! Checks that translated values keep the positional placeholders of their
//! keys and that no value would blank out UI text. Findings are advisory: a
//! table with findings still loads.

use crate::i18n::format::placeholders;
use std::collections::HashMap;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Entries that will render badly (e.g. empty values)
    pub errors: Vec<String>,

    /// Entries that may render badly (e.g. placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate a single key/value entry.
    ///
    /// # Arguments
    /// * `key` - The source text (table key)
    /// * `value` - The translated text
    pub fn validate_entry(key: &str, value: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if value.is_empty() && !key.is_empty() {
            report
                .errors
                .push(format!("Empty translation for {:?}", key));
            return report;
        }

        let key_placeholders = placeholders(key);
        let value_placeholders = placeholders(value);
        if key_placeholders != value_placeholders {
            report.warnings.push(format!(
                "Placeholder mismatch for {:?}: key has {:?}, translation has {:?}",
                key, key_placeholders, value_placeholders
            ));
        }

        report
    }

    /// Validate every entry of a table. Entries are checked in key order so
    /// the report is stable.
    pub fn validate_table(table: &HashMap<String, String>) -> ValidationReport {
        let mut keys: Vec<&String> = table.keys().collect();
        keys.sort();

        let mut report = ValidationReport::new();
        for key in keys {
            report.merge(Self::validate_entry(key, &table[key]));
        }
        report
    }
}
