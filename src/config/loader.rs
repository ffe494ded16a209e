use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AppConfig;
use super::presets::bridges_config;
use crate::errors::{DashboardError, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".impact-dashboard.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str::<AppConfig>(contents)
        .map_err(|e| DashboardError::config(format!("Failed to parse configuration: {}", e)))
}

/// Load a configuration file the user named explicitly.
///
/// A missing or malformed file is an error.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = read_config_file(path).map_err(|e| read_error(path, &e))?;
    let config = parse_config_at(&contents, path)?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from a discovered path.
///
/// A missing file yields `None` so the search can continue; an unreadable
/// or malformed file is an error, the same as for an explicit path.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Result<Option<AppConfig>> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(read_error(config_path, &e)),
    };

    let config = parse_config_at(&contents, config_path)?;
    log::debug!("Loaded config from {}", config_path.display());
    Ok(Some(config))
}

fn read_error(path: &Path, error: &std::io::Error) -> DashboardError {
    DashboardError::config_with_path(format!("Failed to read {}: {}", path.display(), error), path)
}

/// Parse config contents, attaching the file path to any error
fn parse_config_at(contents: &str, path: &Path) -> Result<AppConfig> {
    parse_config(contents).map_err(|e| match e {
        DashboardError::Config { message, .. } => DashboardError::config_with_path(
            format!("{} ({})", message, path.display()),
            path,
        ),
        other => other,
    })
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

/// Search `start` and its ancestors for a configuration file.
///
/// The nearest file wins. If it cannot be read or parsed, that is an
/// error rather than a reason to keep searching.
pub fn discover_config(start: PathBuf) -> Result<Option<AppConfig>> {
    for path in directory_ancestors(start, MAX_TRAVERSAL_DEPTH).map(|dir| dir.join(CONFIG_FILE_NAME)) {
        if let Some(config) = try_load_config_from_path(&path)? {
            return Ok(Some(config));
        }
    }
    Ok(None)
}

/// Resolve the configuration to run with.
///
/// An explicit path must load; otherwise the directory hierarchy is
/// searched and the built-in tenant preset is the fallback.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using built-in config.",
                e
            );
            return Ok(bridges_config());
        }
    };

    Ok(discover_config(current)?.unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using built-in config.",
            MAX_TRAVERSAL_DEPTH
        );
        bridges_config()
    }))
}
