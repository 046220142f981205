//! Platform default locale and text encoding.
//!
//! The values come from the POSIX locale variables. Parsing never reads the
//! environment itself; callers pass a lookup function.

/// Locale variables consulted in precedence order.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

pub const FALLBACK_LOCALE: &str = "en_US";
pub const FALLBACK_ENCODING: &str = "UTF-8";

/// Default locale and encoding of the executing machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLocale {
    /// Locale identifier, e.g. `en_US`.
    pub locale: String,
    /// Character-set name, e.g. `UTF-8`.
    pub encoding: String,
}

impl Default for PlatformLocale {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE, FALLBACK_ENCODING)
    }
}

impl PlatformLocale {
    pub fn new(locale: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            encoding: encoding.into(),
        }
    }

    /// Resolve from the first non-empty locale variable returned by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|&var| lookup(var))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Parse a `language[_territory][.codeset][@modifier]` locale name.
    ///
    /// A missing codeset always yields `UTF-8`. This differs from glibc, where
    /// the implied charset depends on the locale (`fr_FR` is ISO-8859-1,
    /// `de_DE@euro` is ISO-8859-15, `C` is ANSI_X3.4-1968); those mappings are
    /// only reachable through `nl_langinfo`, which needs unsafe FFI.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let without_modifier = value.split_once('@').map_or(value, |(head, _)| head);
        let (name, codeset) = match without_modifier.split_once('.') {
            Some((name, codeset)) => (name, Some(codeset)),
            None => (without_modifier, None),
        };

        let locale = match name {
            "" | "C" | "POSIX" => FALLBACK_LOCALE.to_string(),
            other => other.to_string(),
        };
        let encoding = codeset
            .filter(|codeset| !codeset.is_empty())
            .map(normalize_encoding)
            .unwrap_or_else(|| FALLBACK_ENCODING.to_string());

        Self { locale, encoding }
    }
}

/// Map the common `utf8` spellings to the canonical `UTF-8` name.
fn normalize_encoding(codeset: &str) -> String {
    let compact: String = codeset
        .chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .collect();
    if compact.eq_ignore_ascii_case("utf8") {
        return FALLBACK_ENCODING.to_string();
    }
    codeset.to_string()
}
