use crate::models::error::SError;
use crate::models::paths::INSTALLED_MOD_PREFIX;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::DirEntry;
use std::io;
use tracing::{info, instrument};

/// Entry point for the cleanup logic.
/// Removes every `@`-prefixed directory directly under the game root and
/// returns what was removed. Stops at the first failure; directories removed
/// before it stay removed.
#[instrument]
pub fn purge(game_root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, SError> {
    let failed = |path: &Utf8Path| {
        let path = path.to_owned();
        move |source: io::Error| SError::CleanupFailed { path, source }
    };

    let entries = std::fs::read_dir(game_root).map_err(failed(game_root))?;
    let mut removed = Vec::new();

    for entry in entries {
        let entry = entry.map_err(failed(game_root))?;

        let Some(name) = managed_dir_name(&entry).map_err(failed(game_root))? else {
            continue;
        };

        let path = game_root.join(name);
        info!("Deleting {}", path);
        std::fs::remove_dir_all(&path).map_err(failed(&path))?;
        removed.push(path);
    }

    Ok(removed)
}

/// Name of the entry if it is a directory we installed.
/// Symlinks are left alone, as are names that are not UTF-8.
fn managed_dir_name(entry: &DirEntry) -> io::Result<Option<String>> {
    if !entry.file_type()?.is_dir() {
        return Ok(None);
    }

    Ok(entry
        .file_name()
        .to_str()
        .filter(|name| name.starts_with(INSTALLED_MOD_PREFIX))
        .map(str::to_string))
}
