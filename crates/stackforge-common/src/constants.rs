//! Workspace-wide constants and output naming defaults.

/// Base name of the synthesized compose file, without extension or suffix.
pub const COMPOSE_FILE_BASE: &str = "docker-compose";

/// Fixed extension of the synthesized compose file.
pub const COMPOSE_FILE_EXTENSION: &str = "yml";

/// Default name of the declarative manifest read by the CLI.
pub const DEFAULT_MANIFEST_FILE: &str = "stackforge.yml";

/// Application name used in CLI output.
pub const APP_NAME: &str = "stackforge";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "sforge";

/// Returns the logical compose file name for an optional name suffix.
///
/// `None` yields `docker-compose.yml`; `Some("prod")` yields
/// `docker-compose.prod.yml`.
#[must_use]
pub fn compose_file_name(suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{COMPOSE_FILE_BASE}.{suffix}.{COMPOSE_FILE_EXTENSION}"),
        None => format!("{COMPOSE_FILE_BASE}.{COMPOSE_FILE_EXTENSION}"),
    }
}
