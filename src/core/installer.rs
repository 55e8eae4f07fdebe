use crate::core::library::LibraryLocator;
use crate::models::error::SError;
use crate::models::mod_map::ModMap;
use crate::models::paths::{installed_dir_name, LibPathRules};
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use tracing::{debug, info, instrument};

/// Copies every mod of `mods` from the workshop cache into `game_root` as
/// `@<name>`, replacing any previous copy.
///
/// Fails on the first mod that cannot be installed; the mods after it are
/// not touched. Returns the installed directories.
#[instrument(skip(locator, mods), fields(count = mods.len()))]
pub fn install_mods(
    locator: &LibraryLocator,
    mods: &ModMap,
    game_root: &Utf8Path,
    app_id: u32,
) -> Result<Vec<Utf8PathBuf>, SError> {
    let library = locator.locate()?;
    let lib_paths = LibPathRules::new(&library);

    mods.iter()
        .map(|(id, name)| install_mod(&lib_paths.workshop_item(app_id, *id), game_root, name))
        .collect()
}

/// Replaces `<game_root>/@<mod_name>` with a copy of `source`.
pub fn install_mod(
    source: &Utf8Path,
    game_root: &Utf8Path,
    mod_name: &str,
) -> Result<Utf8PathBuf, SError> {
    validate_mod_name(mod_name).map_err(|e| install_failed(mod_name, e))?;

    if !source.is_dir() {
        return Err(install_failed(
            mod_name,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("workshop content missing at {}", source),
            ),
        ));
    }

    let dest = game_root.join(installed_dir_name(mod_name));
    debug!("{} -> {}", source, dest);

    FileUtils::remove_path_if_exists(&dest).map_err(|e| install_failed(mod_name, e))?;
    FileUtils::copy_recursive(source, &dest).map_err(|e| install_failed(mod_name, e))?;

    info!("Installed {}", dest);
    Ok(dest)
}

/// Names come from the server; keep them from escaping the game root.
fn validate_mod_name(mod_name: &str) -> io::Result<()> {
    let bad = mod_name.trim().is_empty()
        || mod_name == "."
        || mod_name == ".."
        || mod_name.contains(['/', '\\']);

    if bad {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unusable mod name {:?}", mod_name),
        ));
    }
    Ok(())
}

fn install_failed(mod_name: &str, source: io::Error) -> SError {
    SError::InstallFailed {
        mod_name: mod_name.to_string(),
        source,
    }
}
