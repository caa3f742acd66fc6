//! Positional placeholder substitution (`{0}`, `{1}`, ...).
//!
//! `{{` and `}}` are escapes for literal braces. A placeholder whose index has
//! no argument, and any brace that is not part of a recognized form, is copied
//! to the output unchanged so formatting never fails.

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{(\d+)\}").expect("placeholder pattern is valid")
    })
}

/// Substitute `args` into `format` by position.
///
/// # Example
/// ```
/// use ui_locale::i18n::format_positional;
///
/// let out = format_positional("{0} of {1}", &["3".to_string(), "7".to_string()]);
/// assert_eq!(out, "3 of 7");
/// ```
pub fn format_positional(format: &str, args: &[String]) -> String {
    placeholder_regex()
        .replace_all(format, |caps: &Captures| {
            let whole = &caps[0];
            match whole {
                "{{" => "{".to_string(),
                "}}" => "}".to_string(),
                _ => caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| args.get(index))
                    .cloned()
                    .unwrap_or_else(|| whole.to_string()),
            }
        })
        .into_owned()
}

/// Collect the placeholder indices used in `text`, ignoring escaped braces.
pub fn placeholders(text: &str) -> BTreeSet<usize> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
