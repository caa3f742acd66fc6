//! Host UI culture lookup, used only to resolve the `"System"` sentinel.

use tracing::debug;

/// Something that can report the host's current UI culture name.
pub trait HostCulture {
    /// The culture name, e.g. `"zh-CN"`. An empty string is the invariant culture.
    fn current_culture(&self) -> String;
}

/// Reads the operating system locale through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCulture;

impl HostCulture for SystemCulture {
    fn current_culture(&self) -> String {
        match sys_locale::get_locale() {
            Some(raw) => {
                let culture = normalize_culture(&raw);
                debug!("Host culture {:?} normalized to {:?}", raw, culture);
                culture
            }
            None => {
                debug!("Host reported no locale, using invariant culture");
                String::new()
            }
        }
    }
}

/// A fixed culture name, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedCulture(pub String);

impl FixedCulture {
    pub fn new(culture: impl Into<String>) -> Self {
        Self(culture.into())
    }
}

impl HostCulture for FixedCulture {
    fn current_culture(&self) -> String {
        self.0.clone()
    }
}

/// Turn a POSIX-style locale (`zh_CN.UTF-8@euro`) into a culture name (`zh-CN`).
///
/// `C` and `POSIX` map to the invariant culture.
pub fn normalize_culture(raw: &str) -> String {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return String::new();
    }

    base.replace('_', "-")
}
