//! Source encoding resolution, the first phase of every run.

use std::fmt;

use crate::core::keys;
use crate::core::locale::PlatformLocale;
use crate::core::properties::Properties;

/// Outcome of resolving the source encoding for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingResolution {
    /// Default locale of the executing machine.
    pub locale: String,
    /// Encoding recorded under `source-encoding`.
    pub encoding: String,
    /// `true` when the encoding came from the platform rather than the caller,
    /// so the same inputs may analyze differently on another machine.
    pub platform_dependent: bool,
}

impl fmt::Display for EncodingResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Default locale: \"{}\", source code encoding: \"{}\"",
            self.locale, self.encoding
        )?;
        if self.platform_dependent {
            f.write_str(" (analysis is platform dependent)")?;
        }
        Ok(())
    }
}

/// Ensure `source-encoding` is set, filling it from `platform` when absent or empty.
///
/// An explicit, non-empty value is never overwritten.
pub fn resolve_source_encoding(
    properties: &mut Properties,
    platform: &PlatformLocale,
) -> EncodingResolution {
    let explicit = properties
        .get(keys::SOURCE_ENCODING, None)
        .filter(|encoding| !encoding.is_empty())
        .map(str::to_string);

    let (encoding, platform_dependent) = match explicit {
        Some(encoding) => (encoding, false),
        None => {
            properties.set(keys::SOURCE_ENCODING, platform.encoding.as_str());
            (platform.encoding.clone(), true)
        }
    };

    EncodingResolution {
        locale: platform.locale.clone(),
        encoding,
        platform_dependent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> PlatformLocale {
        PlatformLocale::new("fr_FR", "ISO-8859-1")
    }

    #[test]
    fn missing_encoding_is_filled_from_platform() {
        let mut props = Properties::with_defaults();
        let resolution = resolve_source_encoding(&mut props, &platform());

        assert!(resolution.platform_dependent);
        assert_eq!(resolution.encoding, "ISO-8859-1");
        assert_eq!(props.get(keys::SOURCE_ENCODING, None), Some("ISO-8859-1"));
    }

    #[test]
    fn empty_encoding_counts_as_missing() {
        let mut props = Properties::new();
        props.set(keys::SOURCE_ENCODING, "");
        let resolution = resolve_source_encoding(&mut props, &platform());

        assert!(resolution.platform_dependent);
        assert_eq!(props.get(keys::SOURCE_ENCODING, None), Some("ISO-8859-1"));
    }

    #[test]
    fn explicit_encoding_is_kept() {
        let mut props = Properties::new();
        props.set(keys::SOURCE_ENCODING, "UTF-8");
        let resolution = resolve_source_encoding(&mut props, &platform());

        assert!(!resolution.platform_dependent);
        assert_eq!(resolution.encoding, "UTF-8");
        assert_eq!(resolution.locale, "fr_FR");
        assert_eq!(props.get(keys::SOURCE_ENCODING, None), Some("UTF-8"));
    }

    #[test]
    fn message_mentions_platform_dependence_only_when_inferred() {
        let inferred = EncodingResolution {
            locale: "en_US".to_string(),
            encoding: "UTF-8".to_string(),
            platform_dependent: true,
        };
        assert_eq!(
            inferred.to_string(),
            "Default locale: \"en_US\", source code encoding: \"UTF-8\" (analysis is platform dependent)"
        );

        let explicit = EncodingResolution {
            platform_dependent: false,
            ..inferred
        };
        assert_eq!(
            explicit.to_string(),
            "Default locale: \"en_US\", source code encoding: \"UTF-8\""
        );
    }
}
