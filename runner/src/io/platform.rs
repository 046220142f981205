//! Reads the platform locale from the process environment.

use tracing::debug;

use crate::core::locale::PlatformLocale;

/// Detect the default locale and text encoding of the current process.
pub fn detect_platform_locale() -> PlatformLocale {
    let platform = PlatformLocale::from_lookup(|var| std::env::var(var).ok());
    debug!(locale = %platform.locale, encoding = %platform.encoding, "detected platform locale");
    platform
}
