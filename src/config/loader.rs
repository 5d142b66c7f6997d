use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::OmniConfig;
use crate::core::{Error, Result, ResultExt};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".omni-deals.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<OmniConfig> {
    let config = toml::from_str::<OmniConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<OmniConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the config file.
pub fn discover_config(start: PathBuf) -> Option<OmniConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load an explicitly requested config file. Unlike discovery, failures are errors.
pub fn load_config_from(path: &Path) -> Result<OmniConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_and_validate_config(&contents).context(path.display().to_string())
}

/// Load configuration from the nearest `.omni-deals.toml`, or defaults.
pub fn load_config() -> OmniConfig {
    // Get current directory or return default
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return OmniConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        OmniConfig::default()
    })
}
