//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Configuration file names, in search order
const CONFIG_FILE_NAMES: &[&str] = &["relnotes.toml", ".relnotes.toml"];

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: Config = toml::from_str(&content).map_err(ConfigError::TomlError)?;

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Find a configuration file in the directory or its parents.
///
/// The first matching name wins at each level; parents are walked until
/// the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match find_config(dir) {
        Some(path) => match load_config(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                (Config::default(), None)
            }
        },
        None => (Config::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkMode;
    use tempfile::TempDir;

    #[test]
    fn test_find_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.toml");
        std::fs::write(&config_path, "remote = \"upstream\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.toml");
        std::fs::write(&config_path, "remote = \"upstream\"").unwrap();

        let subdir = temp.path().join("sub").join("dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let found = find_config(&subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("relnotes.toml");
        std::fs::write(
            &config_path,
            "link_mode = \"plain\"\nticket_from_branch = true\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.link_mode, Some(LinkMode::Plain));
        assert!(config.ticket_from_branch);
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path());
        assert!(path.is_none());
        assert_eq!(config.remote, "origin");
    }
}
