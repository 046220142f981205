//! Test-only helpers: recording launchers, fixed platforms and log capture.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

use crate::core::locale::PlatformLocale;
use crate::core::properties::Properties;
use crate::launcher::Launcher;

/// Platform locale unlikely to match the machine running the tests.
pub fn fixed_platform() -> PlatformLocale {
    PlatformLocale::new("de_DE", "ISO-8859-15")
}

/// Launcher that records every invocation and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    /// Number of `launch` calls.
    pub calls: usize,
    /// Properties observed by each call, in order.
    pub seen: Vec<Properties>,
    /// When set, every call returns an error with this message.
    pub fail_with: Option<String>,
}

impl RecordingLauncher {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, properties: &Properties) -> Result<()> {
        self.calls += 1;
        self.seen.push(properties.snapshot());
        match &self.fail_with {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

/// Shared in-memory buffer usable as a `tracing_subscriber` writer.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with an INFO-level subscriber scoped to the current thread and
/// return its result together with everything that was logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}

/// Write a settings file into a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for as long as the path is used.
pub fn settings_file(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    let path = temp.path().join("sonar-runner.toml");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}
