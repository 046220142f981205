//! Version of this library, reported as the default `app-version`.

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
