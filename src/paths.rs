//! Where mapscribe keeps `config.json` and its log files.
//!
//! Debug builds and `cargo run` use the working directory so a checkout stays
//! self-contained. Installed builds go through [`dirs`]: Linux splits config
//! (`~/.config/mapscribe`) from logs (`~/.local/share/mapscribe/logs`), other
//! platforms keep both under the data directory.

use std::path::PathBuf;

const APP_DIR: &str = "mapscribe";
const CONFIG_FILE: &str = "config.json";
const LOGS_DIR: &str = "logs";

pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR))
}

/// Falls back to a relative `config.json` when the platform has no config dir.
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join(LOGS_DIR))
        .unwrap_or_else(|| PathBuf::from(LOGS_DIR))
}

/// Create the installed-mode directories. The working directory already
/// exists in dev mode.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_has_json_extension() {
        let path = config_file();
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_logs_dir_is_named_logs() {
        assert!(logs_dir().ends_with("logs"));
    }

    #[test]
    fn test_dev_mode_returns_local_paths() {
        // debug_assertions are on under test
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
    }
}
