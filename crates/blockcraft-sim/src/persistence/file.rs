use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::codec;
use super::error::SaveResult;
use crate::engine::Simulation;

/// Sibling path the save is staged in before it replaces the target.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `sim` to `path`. A reader never observes a half-written file.
pub fn save_to_file(sim: &Simulation, path: &Path) -> SaveResult<()> {
    let staging = staging_path(path);
    fs::write(&staging, codec::encode(sim))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    log::info!("saved world to {}", path.display());
    Ok(())
}

/// Read and decode the save at `path`.
pub fn load_from_file(path: &Path) -> SaveResult<Simulation> {
    let text = fs::read_to_string(path)?;
    match codec::decode(&text) {
        Ok(sim) => {
            log::info!("loaded world from {}", path.display());
            Ok(sim)
        }
        Err(err) => {
            log::warn!("rejected save file {}: {err}", path.display());
            Err(err)
        }
    }
}
