//! Launcher abstraction for the analysis work step.
//!
//! The [`Launcher`] trait decouples the execution sequence from whatever
//! actually performs the analysis. A runner invokes its launcher exactly once
//! per [`Runner::execute`](crate::runner::Runner::execute) call, after the
//! source encoding has been resolved. Tests use recording launchers that never
//! leave the process.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::properties::Properties;

/// Performs the analysis work for a configured runner.
pub trait Launcher {
    /// Run the analysis with the final property set.
    fn launch(&mut self, properties: &Properties) -> Result<()>;
}

impl<F> Launcher for F
where
    F: FnMut(&Properties) -> Result<()>,
{
    fn launch(&mut self, properties: &Properties) -> Result<()> {
        self(properties)
    }
}

/// Output format for [`PrintLauncher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    /// One `key=value` line per property, sorted by key.
    #[default]
    Lines,
    /// A single pretty-printed JSON object.
    Json,
}

/// Launcher that writes the resolved properties instead of running an analysis.
pub struct PrintLauncher<W> {
    out: W,
    format: PrintFormat,
}

impl<W: Write> PrintLauncher<W> {
    pub fn new(out: W, format: PrintFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Launcher for PrintLauncher<W> {
    #[instrument(skip_all, fields(format = ?self.format, count = properties.len()))]
    fn launch(&mut self, properties: &Properties) -> Result<()> {
        match self.format {
            PrintFormat::Lines => {
                for (key, value) in properties {
                    writeln!(self.out, "{key}={value}").context("write property")?;
                }
            }
            PrintFormat::Json => {
                let mut payload =
                    serde_json::to_string_pretty(properties).context("serialize properties")?;
                payload.push('\n');
                self.out
                    .write_all(payload.as_bytes())
                    .context("write properties json")?;
            }
        }
        self.out.flush().context("flush properties")?;
        debug!("properties printed");
        Ok(())
    }
}
