use std::path::PathBuf;

// =============================================================================
// Settings keys and file names
// =============================================================================

/// Settings key holding the list of registered dialects
pub const SETTINGS_DIALECT_REGISTRY: &str = "cobol-lsp.dialect.registry";

/// Directory name used under the config and data directories
pub const APP_NAME: &str = "dialect-registry";

/// File name of the JSON settings store
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File name of the SQLite settings store
pub const SQLITE_FILE_NAME: &str = "settings.db";

/// File name of the log file
pub const LOG_FILE_NAME: &str = "dialect-registry.log";

/// Returns the path to the config directory for dialect-registry.
/// Uses $XDG_CONFIG_HOME/dialect-registry if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/dialect-registry,
/// or ./dialect-registry if neither is available.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory, where the log file lives.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the default path of the JSON settings store.
pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE_NAME)
}

/// Returns the default path of the SQLite settings store.
pub fn sqlite_path() -> PathBuf {
    config_dir().join(SQLITE_FILE_NAME)
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, home_suffix: &str) -> PathBuf {
    let base = xdg_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_suffix)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
