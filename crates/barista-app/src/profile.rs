use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use barista_config::Config;

const DEFAULT_PROFILE: &str = "barista.json";

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Profile path from BARISTA_PROFILE, or `barista.json` in the working directory if present
fn profile_path() -> Option<PathBuf> {
    match env::var("BARISTA_PROFILE") {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => {
            let default = PathBuf::from(DEFAULT_PROFILE);
            default.exists().then_some(default)
        }
    }
}

pub fn load_profile(path: &Path) -> Result<Config, ProfileError> {
    let data = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Profile (if any) with environment overrides on top
pub fn load_config() -> Result<Config, ProfileError> {
    match profile_path() {
        Some(path) => {
            let mut config = load_profile(&path)?;
            config.apply_env();
            Ok(config)
        }
        None => Ok(Config::new()),
    }
}
