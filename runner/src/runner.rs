//! The runner: a property bag plus a fixed two-phase execution sequence.
//!
//! ```text
//! Runner::new ──► set_property / add_properties / set_app ...
//!                 │
//!                 ▼
//!             execute()
//!                 ├─ 1. resolve `source-encoding` and log the decision
//!                 └─ 2. Launcher::launch (exactly once)
//! ```
//!
//! Setters return `&mut Self` so configuration chains on the concrete
//! `Runner<L>` type.

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::core::encoding::{self, EncodingResolution};
use crate::core::keys;
use crate::core::locale::PlatformLocale;
use crate::core::properties::Properties;
use crate::io::platform::detect_platform_locale;
use crate::launcher::Launcher;

/// Accumulates analysis properties and drives a [`Launcher`].
pub struct Runner<L> {
    properties: Properties,
    platform: PlatformLocale,
    launcher: L,
}

impl<L> Runner<L> {
    /// Create a runner with default properties, using the process locale.
    pub fn new(launcher: L) -> Self {
        Self::with_platform(launcher, detect_platform_locale())
    }

    /// Create a runner with default properties and an explicit platform locale.
    pub fn with_platform(launcher: L, platform: PlatformLocale) -> Self {
        Self {
            properties: Properties::with_defaults(),
            platform,
            launcher,
        }
    }

    /// Declare analysis properties, for example `sonar.projectKey=foo`.
    ///
    /// Existing keys are overwritten; the input is only borrowed when passed by reference.
    pub fn add_properties<I, K, V>(&mut self, props: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties.add_all(props);
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.set(key, value);
        self
    }

    /// Identify the calling tool, e.g. in the user agent of outbound requests.
    pub fn set_app(&mut self, name: impl Into<String>, version: impl Into<String>) -> &mut Self {
        self.set_property(keys::APP_NAME, name)
            .set_property(keys::APP_VERSION, version)
    }

    pub fn app(&self) -> Option<&str> {
        self.property(keys::APP_NAME, None)
    }

    pub fn app_version(&self) -> Option<&str> {
        self.property(keys::APP_VERSION, None)
    }

    pub fn property<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        self.properties.get(key, default)
    }

    /// Independent copy of the current properties.
    pub fn properties(&self) -> Properties {
        self.properties.snapshot()
    }

    pub fn platform(&self) -> &PlatformLocale {
        &self.platform
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn into_launcher(self) -> L {
        self.launcher
    }

    /// Resolve `source-encoding` (falling back to the platform default) and log the outcome.
    pub fn resolve_source_encoding(&mut self) -> EncodingResolution {
        let resolution = encoding::resolve_source_encoding(&mut self.properties, &self.platform);
        info!("{resolution}");
        resolution
    }
}

impl<L: Launcher> Runner<L> {
    /// Resolve the source encoding, then invoke the launcher once.
    ///
    /// Errors from the launcher are returned unchanged.
    #[instrument(skip_all, fields(task = self.property(keys::TASK, None).unwrap_or_default()))]
    pub fn execute(&mut self) -> Result<()> {
        let resolution = self.resolve_source_encoding();
        debug!(
            platform_dependent = resolution.platform_dependent,
            properties = self.properties.len(),
            "launching analysis"
        );
        self.launcher.launch(&self.properties)
    }
}
