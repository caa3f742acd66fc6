//! Translation tokens: either a translatable string or an opaque value.

use std::borrow::Cow;
use std::fmt;

/// One piece of a phrase passed to `TranslationStore::translate`.
///
/// Strings are looked up in the active table; anything else is rendered with
/// its `Display` implementation and never translated.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A translation key, passed through literally when the table has no entry.
    Text(Cow<'a, str>),
    /// An opaque value, already rendered.
    Value(String),
}

impl<'a> Token<'a> {
    /// Wrap any displayable value as an opaque, untranslated token.
    pub fn value(value: impl fmt::Display) -> Self {
        Token::Value(value.to_string())
    }

    /// The translation key, if this token is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text.as_ref()),
            Token::Value(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(text: &'a str) -> Self {
        Token::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Token<'a> {
    fn from(text: &'a String) -> Self {
        Token::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Token<'_> {
    fn from(text: String) -> Self {
        Token::Text(Cow::Owned(text))
    }
}

macro_rules! impl_value_token {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Token<'_> {
                fn from(value: $t) -> Self {
                    Token::Value(value.to_string())
                }
            }
        )*
    };
}

impl_value_token!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
