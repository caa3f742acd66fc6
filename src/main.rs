//! ui-locale: inspect and apply translation tables from the command line.
//!
//! Usage:
//!   ui-locale list                       # Locales that can be selected
//!   ui-locale translate <token>...       # Translate and concatenate tokens
//!   ui-locale format <format> <arg>...   # Translate a format string and its args
//!   ui-locale apply <tree.json>          # Translate a UI tree, print it as JSON
//!
//! Tokens and args that parse as numbers are treated as values and never
//! translated; everything else is a key.
//!
//! Optional environment variables:
//! - UI_LOCALE_LANGUAGE (defaults to System)
//! - UI_LOCALE_TRANSLATIONS_DIR (defaults to i18n)
//! - UI_LOCALE_VALIDATE (defaults to true)

use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};
use ui_locale::config::Config;
use ui_locale::i18n::{Token, TranslationStore};
use ui_locale::tree::Widget;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ui_locale=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }
    let command = args[1].as_str();
    let rest = &args[2..];

    if matches!(command, "--help" | "-h" | "help") {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;
    let store = TranslationStore::from_config(&config);
    info!("Active locale: {}", store.active_locale());

    match command {
        "list" => {
            for locale in store.list_available() {
                println!("{}", locale);
            }
        }
        "translate" => {
            let tokens: Vec<Token> = rest.iter().map(|arg| parse_token(arg)).collect();
            println!("{}", store.translate(&tokens));
        }
        "format" => {
            let (format, args) = rest
                .split_first()
                .context("format requires a format string")?;
            let args: Vec<Token> = args.iter().map(|arg| parse_token(arg)).collect();
            println!("{}", store.translate_format(format, &args));
        }
        "apply" => {
            let path = rest.first().context("apply requires a tree file")?;
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read tree file {}", path))?;
            let mut tree: Widget = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse tree file {}", path))?;

            let translated = store.apply_translations(&mut tree);
            info!("Translated {} node(s)", translated);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    debug!(
        "Metrics: {}",
        serde_json::to_string(&store.metrics().report())?
    );
    Ok(())
}

/// Numbers are values; anything else is a translation key.
fn parse_token(arg: &str) -> Token<'_> {
    if let Ok(n) = arg.parse::<i64>() {
        return n.into();
    }
    if let Ok(n) = arg.parse::<f64>() {
        if n.is_finite() {
            return n.into();
        }
    }
    arg.into()
}

fn print_usage() {
    eprintln!(
        r#"Usage: ui-locale <command> [args]

Commands:
  list                       List selectable locales
  translate <token>...       Translate and concatenate tokens
  format <format> <arg>...   Translate a format string and substitute args
  apply <tree.json>          Translate a UI tree and print it as JSON
  help                       Show this message

Environment:
  UI_LOCALE_LANGUAGE          Requested locale (default: System)
  UI_LOCALE_TRANSLATIONS_DIR  Translations directory (default: i18n)
  UI_LOCALE_VALIDATE          Validate loaded tables (default: true)"#
    );
}
