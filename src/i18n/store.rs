//! Translation store: the active locale and its key→text table.

use crate::config::Config;
use crate::i18n::format::format_positional;
use crate::i18n::{
    HostCulture, LoadError, LocaleCode, LocaleRegistry, SystemCulture, Token, TranslationMetrics,
    TranslationValidator,
};
use crate::tree::{walk, Node};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Holds the active locale and translation table.
///
/// One store is created by the application and passed to whatever needs
/// translation. Loading replaces the table wholesale; lookups never fail and
/// return the key itself when the table has no entry for it.
pub struct TranslationStore {
    registry: LocaleRegistry,
    culture: Box<dyn HostCulture>,
    active_locale: LocaleCode,
    table: HashMap<String, String>,
    validate: bool,
    metrics: TranslationMetrics,
}

impl TranslationStore {
    /// Create a store in the baseline locale (identity translation).
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            culture: Box::new(SystemCulture),
            active_locale: LocaleCode::baseline(),
            table: HashMap::new(),
            validate: true,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Create a store from configuration and load the configured language.
    pub fn from_config(config: &Config) -> Self {
        let mut store = Self::new(LocaleRegistry::new(config.translations_dir.clone()))
            .with_validation(config.validate_tables);
        store.load(config.language.as_str());
        store
    }

    /// Use `culture` to resolve the `"System"` sentinel.
    pub fn with_culture(mut self, culture: impl HostCulture + 'static) -> Self {
        self.culture = Box::new(culture);
        self
    }

    /// Enable or disable validation of freshly loaded tables.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn active_locale(&self) -> &LocaleCode {
        &self.active_locale
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Number of entries in the active table (0 means identity translation).
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// List every selectable locale. See `LocaleRegistry::list_available`.
    pub fn list_available(&self) -> Vec<LocaleCode> {
        self.registry.list_available()
    }

    // ==================== Loading ====================

    /// Load the table for `requested`, logging any failure.
    ///
    /// On failure the previous locale and table stay active.
    pub fn load(&mut self, requested: impl Into<LocaleCode>) {
        if let Err(e) = self.try_load(requested) {
            error!(
                "Failed to load translations for {}, keeping {}: {}",
                e.locale(),
                self.active_locale,
                e
            );
        }
    }

    /// Load the table for `requested` and return the locale that became active.
    ///
    /// Resolution order:
    /// 1. `"System"` is replaced by the host's current UI culture.
    /// 2. An exact match among the available locales wins.
    /// 3. Otherwise the first available locale with the same language family.
    /// 4. Otherwise the baseline, which loads an empty table and never fails.
    ///
    /// # Errors
    /// * `ResourceUnavailable` if the table file cannot be read
    /// * `MalformedTranslationData` if it is not a flat JSON string map, or is empty
    ///
    /// The store is unchanged when an error is returned.
    pub fn try_load(&mut self, requested: impl Into<LocaleCode>) -> Result<LocaleCode, LoadError> {
        let requested = requested.into();
        let locale = self.resolve(&requested);

        let table = match self.read_table(&locale) {
            Ok(table) => table,
            Err(e) => {
                self.metrics.record_load_failure();
                return Err(e);
            }
        };

        if self.validate {
            report_findings(&locale, &table);
        }

        info!("Loaded {} translation(s) for {}", table.len(), locale);
        self.table = table;
        self.active_locale = locale.clone();
        self.metrics.record_load();
        Ok(locale)
    }

    /// Resolve a requested code to one of the loadable locales.
    pub fn resolve(&self, requested: &LocaleCode) -> LocaleCode {
        let available = self.registry.loadable();

        let wanted = if requested.is_system() {
            let culture = LocaleCode::new(self.culture.current_culture());
            debug!("Resolved {} to host culture {:?}", requested, culture.as_str());
            culture
        } else {
            requested.clone()
        };

        if available.contains(&wanted) {
            return wanted;
        }

        let fallback = available
            .iter()
            .find(|candidate| candidate.same_family(&wanted))
            .cloned()
            .unwrap_or_else(LocaleCode::baseline);

        info!("Locale {:?} not found, using {}", wanted.as_str(), fallback);
        fallback
    }

    fn read_table(&self, locale: &LocaleCode) -> Result<HashMap<String, String>, LoadError> {
        if locale.is_baseline() {
            return Ok(HashMap::new());
        }

        let text = self.registry.read_table_text(locale)?;
        decode_table(locale, &text)
    }

    // ==================== Translation ====================

    /// Look up one key, returning the key itself when it has no entry.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(key) {
            Some(value) => {
                self.metrics.record_hit();
                value
            }
            None => {
                self.metrics.record_miss();
                key
            }
        }
    }

    /// Concatenate `tokens`, translating string tokens and rendering the rest.
    ///
    /// # Example
    /// ```
    /// use ui_locale::i18n::{LocaleRegistry, Token, TranslationStore};
    ///
    /// let store = TranslationStore::new(LocaleRegistry::default());
    /// let text = store.translate(&[Token::from("Hello"), " ".into(), 42.into()]);
    /// assert_eq!(text, "Hello 42");
    /// ```
    pub fn translate(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        for token in tokens {
            match token {
                Token::Text(text) => out.push_str(self.lookup(text)),
                Token::Value(value) => out.push_str(value),
            }
        }
        out
    }

    /// Translate a single string.
    pub fn translate_text(&self, text: &str) -> String {
        self.lookup(text).to_string()
    }

    /// Translate `format`, translate each string argument on its own, then
    /// substitute the arguments into the `{0}`, `{1}`, ... placeholders.
    pub fn translate_format(&self, format: &str, args: &[Token<'_>]) -> String {
        let args: Vec<String> = args
            .iter()
            .map(|arg| match arg {
                Token::Text(text) => self.translate_text(text),
                Token::Value(value) => value.clone(),
            })
            .collect();

        format_positional(self.lookup(format), &args)
    }

    /// Translate the display text of every node reachable from `root`.
    ///
    /// Free-text inputs and selection lists are skipped since their text is
    /// user data. Returns the number of nodes whose text was rewritten.
    pub fn apply_translations(&self, root: &mut dyn Node) -> usize {
        let mut translated = 0;

        walk(root, |node| {
            if node.kinds().is_text_exempt() {
                return;
            }
            let text = match node.text() {
                Some(text) => self.translate_text(text),
                None => return,
            };
            node.set_text(text);
            translated += 1;
        });

        debug!("Applied {} translation(s) to tree", translated);
        translated
    }
}

/// Decode table text as a flat, non-empty JSON object of strings.
pub fn decode_table(locale: &LocaleCode, text: &str) -> Result<HashMap<String, String>, LoadError> {
    let table: HashMap<String, String> =
        serde_json::from_str(text).map_err(|e| LoadError::MalformedTranslationData {
            locale: locale.clone(),
            reason: e.to_string(),
        })?;

    if table.is_empty() {
        return Err(LoadError::MalformedTranslationData {
            locale: locale.clone(),
            reason: "table is empty".to_string(),
        });
    }

    Ok(table)
}

fn report_findings(locale: &LocaleCode, table: &HashMap<String, String>) {
    let report = TranslationValidator::validate_table(table);
    for finding in report.errors.iter().chain(&report.warnings) {
        warn!("{}: {}", locale, finding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::FixedCulture;
    use crate::tree::{NodeKind, Widget};
    use std::fs;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, TranslationStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, contents) in files {
            fs::write(temp_dir.path().join(name), contents).expect("Failed to write table");
        }
        let store = TranslationStore::new(LocaleRegistry::new(temp_dir.path()))
            .with_culture(FixedCulture::new("en-US"));
        (temp_dir, store)
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_new_store_is_baseline() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.active_locale(), "en-US");
        assert_eq!(store.table_len(), 0);
    }

    #[test]
    fn test_exact_match() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"Start":"Démarrer"}"#)]);
        let locale = store.try_load("fr-FR").unwrap();
        assert_eq!(locale, "fr-FR");
        assert_eq!(store.translate_text("Start"), "Démarrer");
    }

    #[test]
    fn test_language_family_fallback() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"Start":"Démarrer"}"#)]);
        assert_eq!(store.try_load("fr-CA").unwrap(), "fr-FR");
    }

    #[test]
    fn test_fallback_picks_first_in_sequence_order() {
        // zh-CN is compiled in and precedes any discovered file
        let (_dir, mut store) = store_with(&[("zh-TW", r#"{"Start":"啟動"}"#)]);
        assert_eq!(store.try_load("zh-HK").unwrap(), "zh-CN");
    }

    #[test]
    fn test_unknown_family_falls_back_to_baseline() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"a":"b"}"#)]);
        assert_eq!(store.try_load("ko-KR").unwrap(), "en-US");
        assert_eq!(store.table_len(), 0);
    }

    #[test]
    fn test_dashless_code_matches_dashless_file() {
        let (_dir, mut store) = store_with(&[("klingon", r#"{"Start":"tagh"}"#)]);
        assert_eq!(store.try_load("fr").unwrap(), "klingon");
    }

    #[test]
    fn test_system_uses_host_culture() {
        let (_dir, store) = store_with(&[]);
        let mut store = store.with_culture(FixedCulture::new("zh-CN"));
        assert_eq!(store.try_load("System").unwrap(), "zh-CN");
        assert_eq!(store.translate_text("Start"), "启动");
    }

    #[test]
    fn test_system_with_invariant_culture_falls_back_to_baseline() {
        let (_dir, store) = store_with(&[]);
        let mut store = store.with_culture(FixedCulture::new(""));
        assert_eq!(store.try_load("System").unwrap(), "en-US");
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_baseline_clears_table() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();
        assert!(store.table_len() > 0);

        store.try_load("en-US").unwrap();
        assert_eq!(store.table_len(), 0);
        assert_eq!(store.translate_text("Start"), "Start");
    }

    #[test]
    fn test_load_replaces_rather_than_merges() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"Start":"Démarrer"}"#)]);
        store.try_load("zh-CN").unwrap();
        assert!(store.contains_key("Stop"));

        store.try_load("fr-FR").unwrap();
        assert!(!store.contains_key("Stop"));
        assert_eq!(store.table_len(), 1);
    }

    #[test]
    fn test_malformed_table_keeps_previous_state() {
        let (_dir, mut store) = store_with(&[("de-DE", "not json")]);
        store.try_load("zh-CN").unwrap();
        let before = store.table_len();

        let err = store.try_load("de-DE").unwrap_err();
        assert!(matches!(err, LoadError::MalformedTranslationData { .. }));
        assert_eq!(store.active_locale(), "zh-CN");
        assert_eq!(store.table_len(), before);
    }

    #[test]
    fn test_empty_table_is_malformed() {
        let (_dir, mut store) = store_with(&[("de-DE", "{}")]);
        let err = store.try_load("de-DE").unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert_eq!(store.active_locale(), "en-US");
    }

    #[test]
    fn test_nested_json_is_malformed() {
        let (_dir, mut store) = store_with(&[("de-DE", r#"{"a":{"b":"c"}}"#)]);
        assert!(store.try_load("de-DE").is_err());
    }

    #[test]
    fn test_load_absorbs_errors() {
        let (_dir, mut store) = store_with(&[("de-DE", "[]")]);
        store.load("de-DE");
        assert_eq!(store.active_locale(), "en-US");
        assert_eq!(store.metrics().load_failures(), 1);
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let (dir, store) = store_with(&[]);
        let err = store
            .registry()
            .read_table_text(&LocaleCode::new("it-IT"))
            .unwrap_err();
        assert!(matches!(err, LoadError::ResourceUnavailable { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_non_utf8_file_keeps_previous_state() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("de-DE"), [0xffu8, 0xfe, 0x00]).unwrap();
        let mut store = TranslationStore::new(LocaleRegistry::new(temp_dir.path()));

        let err = store.try_load("de-DE").unwrap_err();
        assert!(matches!(err, LoadError::ResourceUnavailable { .. }));
        assert_eq!(store.active_locale(), "en-US");
    }

    #[test]
    fn test_validation_does_not_reject_table() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"{0} item(s)":"article"}"#)]);
        assert_eq!(store.try_load("fr-FR").unwrap(), "fr-FR");
        assert_eq!(store.translate_format("{0} item(s)", &[5.into()]), "article");
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_passthrough_and_values() {
        let (_dir, store) = store_with(&[]);
        let text = store.translate(&["Hello".into(), " ".into(), 42.into()]);
        assert_eq!(text, "Hello 42");
    }

    #[test]
    fn test_translate_hit() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();
        assert_eq!(store.translate(&["Hello".into()]), "你好");
    }

    #[test]
    fn test_translate_does_not_translate_values() {
        let (_dir, mut store) = store_with(&[("fr-FR", r#"{"42":"quarante-deux"}"#)]);
        store.try_load("fr-FR").unwrap();
        assert_eq!(store.translate(&[42.into()]), "42");
        assert_eq!(store.translate(&["42".into()]), "quarante-deux");
    }

    #[test]
    fn test_translate_empty() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.translate(&[]), "");
    }

    #[test]
    fn test_lookup_records_metrics() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();
        store.translate(&["Start".into(), "nope".into()]);
        assert_eq!(store.metrics().lookup_hits(), 1);
        assert_eq!(store.metrics().lookup_misses(), 1);
    }

    // ==================== TranslateFormat Tests ====================

    #[test]
    fn test_format_without_translation() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.translate_format("{0} item(s)", &[5.into()]), "5 item(s)");
    }

    #[test]
    fn test_format_with_translated_format() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();
        assert_eq!(store.translate_format("{0} item(s)", &[5.into()]), "5 个项目");
    }

    #[test]
    fn test_format_translates_string_args() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();
        assert_eq!(
            store.translate_format("Current language: {0}", &["Language".into()]),
            "当前语言：语言"
        );
    }

    #[test]
    fn test_format_never_fails_on_missing_args() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(store.translate_format("{0} and {1}", &["a".into()]), "a and {1}");
    }

    // ==================== ApplyTranslations Tests ====================

    #[test]
    fn test_apply_translations() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();

        let mut form = Widget::new(NodeKind::GenericContainer)
            .with_text("Settings")
            .with_control(Widget::label("Language"))
            .with_control(
                Widget::new(NodeKind::TabularList)
                    .with_column(Widget::new(NodeKind::ColumnHeader).with_text("Name"))
                    .with_column(Widget::new(NodeKind::ColumnHeader).with_text("Latency")),
            )
            .with_context_menu(
                Widget::new(NodeKind::ContextMenu)
                    .with_item(Widget::new(NodeKind::MenuItem).with_text("Copy")),
            );

        let translated = store.apply_translations(&mut form);
        assert_eq!(translated, 5);
        assert_eq!(form.text.as_deref(), Some("设置"));
        assert_eq!(form.controls[0].text.as_deref(), Some("语言"));
        assert_eq!(form.controls[1].columns[1].text.as_deref(), Some("延迟"));
        assert_eq!(
            form.context_menu.as_ref().unwrap().items[0].text.as_deref(),
            Some("复制")
        );
    }

    #[test]
    fn test_apply_translations_skips_user_data() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();

        let mut form = Widget::new(NodeKind::GenericContainer)
            .with_control(Widget::new(NodeKind::TextInput).with_text("Start"))
            .with_control(Widget::new(NodeKind::SelectionList).with_text("Stop"))
            .with_control(Widget::label("Start"));

        store.apply_translations(&mut form);
        assert_eq!(form.controls[0].text.as_deref(), Some("Start"));
        assert_eq!(form.controls[1].text.as_deref(), Some("Stop"));
        assert_eq!(form.controls[2].text.as_deref(), Some("启动"));
    }

    #[test]
    fn test_apply_translations_leaves_textless_nodes() {
        let (_dir, store) = store_with(&[]);
        let mut form = Widget::new(NodeKind::GenericContainer);
        assert_eq!(store.apply_translations(&mut form), 0);
        assert_eq!(form.text, None);
    }

    #[test]
    fn test_exempt_container_children_are_still_walked() {
        let (_dir, mut store) = store_with(&[]);
        store.try_load("zh-CN").unwrap();

        let mut combo = Widget::new(NodeKind::SelectionList)
            .with_kind(NodeKind::GenericContainer)
            .with_text("Start")
            .with_control(Widget::label("Stop"));

        store.apply_translations(&mut combo);
        assert_eq!(combo.text.as_deref(), Some("Start"));
        assert_eq!(combo.controls[0].text.as_deref(), Some("停止"));
    }

    // ==================== decode_table Tests ====================

    #[test]
    fn test_decode_table() {
        let table = decode_table(&LocaleCode::new("x"), r#"{"a":"b","c":"d"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["a"], "b");
    }
}
