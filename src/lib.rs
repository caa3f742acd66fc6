//! Localization engine: resolves a requested locale to a translation table,
//! translates text, and applies translations across a UI tree.

pub mod config;
pub mod i18n;
pub mod tree;
