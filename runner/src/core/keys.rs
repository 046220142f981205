//! Property keys recognized by the runner and their default values.

/// Address of the analysis server.
pub const HOST_URL: &str = "host-url";
/// Requested operation.
pub const TASK: &str = "task";
/// Name of the calling tool, sent downstream as part of the client identification.
pub const APP_NAME: &str = "app-name";
/// Version of the calling tool.
pub const APP_VERSION: &str = "app-version";
/// Text encoding used when reading source inputs.
pub const SOURCE_ENCODING: &str = "source-encoding";

pub const DEFAULT_HOST_URL: &str = "http://localhost:9000";
pub const DEFAULT_TASK: &str = "scan";
pub const DEFAULT_APP_NAME: &str = "SonarRunner";
