//! Property settings loaded from a TOML file.
//!
//! Nested tables flatten into dotted keys, so
//!
//! ```toml
//! [sonar]
//! projectKey = "my:project"
//! sources = ["src", "lib"]
//! ```
//!
//! yields `sonar.projectKey=my:project` and `sonar.sources=src,lib`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use toml::{Table, Value};
use tracing::debug;

use crate::core::properties::Properties;

/// Load and flatten a settings file. The file must exist.
pub fn load_settings(path: &Path) -> Result<Properties> {
    debug!(path = %path.display(), "loading settings");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read settings {}", path.display()))?;
    let props = parse_settings(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(count = props.len(), "settings loaded");
    Ok(props)
}

/// Flatten TOML settings text into properties.
pub fn parse_settings(contents: &str) -> Result<Properties> {
    let table: Table = toml::from_str(contents).context("parse settings toml")?;
    let mut props = Properties::new();
    flatten_table("", &table, &mut props)?;
    Ok(props)
}

fn flatten_table(prefix: &str, table: &Table, props: &mut Properties) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::Table(nested) => flatten_table(&key, nested, props)?,
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    match scalar_to_string(item) {
                        Some(part) => parts.push(part),
                        None => bail!("unsupported array item for {key}: only scalars are allowed"),
                    }
                }
                props.set(key, parts.join(","));
            }
            scalar => {
                if let Some(text) = scalar_to_string(scalar) {
                    props.set(key, text);
                }
            }
        }
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Integer(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::Boolean(flag) => Some(flag.to_string()),
        Value::Datetime(datetime) => Some(datetime.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_tables_into_dotted_keys() {
        let props = parse_settings(
            r#"
task = "scan"

[sonar]
projectKey = "my:project"

[sonar.java]
source = 17
"#,
        )
        .expect("parse");

        assert_eq!(props.get("task", None), Some("scan"));
        assert_eq!(props.get("sonar.projectKey", None), Some("my:project"));
        assert_eq!(props.get("sonar.java.source", None), Some("17"));
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn renders_scalars_and_joins_arrays() {
        let props = parse_settings(
            r#"
"sonar.sources" = ["src", "lib"]
"sonar.verbose" = true
"sonar.ratio" = 1.5
"source-encoding" = ""
when = 1979-05-27T07:32:00Z
day = 1979-05-27
"#,
        )
        .expect("parse");

        assert_eq!(props.get("sonar.sources", None), Some("src,lib"));
        assert_eq!(props.get("sonar.verbose", None), Some("true"));
        assert_eq!(props.get("sonar.ratio", None), Some("1.5"));
        assert_eq!(props.get("source-encoding", None), Some(""));
        assert_eq!(props.get("when", None), Some("1979-05-27T07:32:00Z"));
        assert_eq!(props.get("day", None), Some("1979-05-27"));
    }

    #[test]
    fn rejects_arrays_of_tables() {
        let err = parse_settings(
            r#"
[[modules]]
name = "core"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("modules"), "{err:#}");
    }

    #[test]
    fn load_reports_missing_file_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing.toml");
        let err = load_settings(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("sonar-runner.toml");
        fs::write(&path, "\"host-url\" = \"http://sonar.internal:9000\"\n").expect("write");

        let props = load_settings(&path).expect("load");
        assert_eq!(
            props.get("host-url", None),
            Some("http://sonar.internal:9000")
        );
    }
}
