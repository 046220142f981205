//! Command-line surface of the `sonar-runner` binary.
//!
//! Precedence, lowest to highest: built-in defaults, `--settings` file,
//! positional task and `--app`/`--app-version`, then `-D` definitions.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;

use crate::core::keys;
use crate::io::settings::load_settings;
use crate::launcher::{Launcher, PrintFormat};
use crate::runner::Runner;

#[derive(Debug, Parser)]
#[command(
    name = "sonar-runner",
    version,
    about = "Resolve analysis properties and launch a code analysis"
)]
pub struct Cli {
    /// Define a property, e.g. `-D sonar.projectKey=demo`. Repeatable.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,

    /// TOML settings file whose (flattened) entries seed the properties.
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Name of the calling tool.
    #[arg(long, value_name = "NAME")]
    pub app: Option<String>,

    /// Version of the calling tool.
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Print the resolved properties as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short = 'X', long)]
    pub debug: bool,

    /// Task to run (defaults to `scan`).
    pub task: Option<String>,
}

impl Cli {
    pub fn print_format(&self) -> PrintFormat {
        if self.json {
            PrintFormat::Json
        } else {
            PrintFormat::Lines
        }
    }

    /// Build a runner configured from the command line.
    pub fn build_runner<L: Launcher>(&self, launcher: L) -> Result<Runner<L>> {
        let mut runner = Runner::new(launcher);
        self.configure(&mut runner)?;
        Ok(runner)
    }

    /// Apply settings, task, app identification and definitions in precedence order.
    pub fn configure<L>(&self, runner: &mut Runner<L>) -> Result<()> {
        if let Some(path) = &self.settings {
            let settings = load_settings(path)?;
            runner.add_properties(&settings);
        }
        if let Some(task) = &self.task {
            runner.set_property(keys::TASK, task);
        }
        match (&self.app, &self.app_version) {
            (Some(name), Some(version)) => {
                runner.set_app(name, version);
            }
            (Some(name), None) => {
                runner.set_property(keys::APP_NAME, name);
            }
            (None, Some(version)) => {
                runner.set_property(keys::APP_VERSION, version);
            }
            (None, None) => {}
        }
        for (key, value) in &self.defines {
            runner.set_property(key, value);
        }
        debug!(defines = self.defines.len(), "runner configured");
        Ok(())
    }
}

/// Parse a `KEY=VALUE` definition. The value may itself contain `=`.
pub fn parse_define(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("invalid property definition {raw:?}: expected KEY=VALUE");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("invalid property definition {raw:?}: empty key");
    }
    Ok((key.to_string(), value.to_string()))
}
