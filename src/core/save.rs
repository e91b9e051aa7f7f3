use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What the start screen remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub color: String,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("save record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `{"color": <label>}` to `path`, replacing whatever was there.
/// Parent directories are created on demand.
pub fn save(path: &Path, label: &str) -> Result<(), SaveError> {
    let io_err = |source| SaveError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let record = SaveRecord { color: label.to_string() };
    let json = serde_json::to_string(&record)?;
    fs::write(path, json).map_err(io_err)?;
    info!("Saved choice '{}' to {:?}", label, path);
    Ok(())
}

pub fn load(path: &Path) -> Result<SaveRecord, SaveError> {
    let text = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
