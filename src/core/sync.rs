use crate::core::cleanup;
use crate::core::fetcher::{locate_steamcmd, SteamCmd};
use crate::core::installer;
use crate::core::library::LibraryLocator;
use crate::models::error::{SError, SyncStage};
use crate::models::server::ServerDescriptor;
use crate::utils::process::CommandRunner;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, instrument};

/// Sequences the update and clean requests for one run.
///
/// Every failure aborts the request and comes back as [`SError::Stage`]
/// naming the step that failed.
pub struct SyncPipeline<'a> {
    pub runner: &'a dyn CommandRunner,
    pub locator: &'a LibraryLocator,
    /// Game installation root, resolved once for the run.
    pub game_root: &'a Utf8Path,
    pub app_id: u32,
    pub steamcmd_override: Option<&'a Utf8Path>,
}

impl<'a> SyncPipeline<'a> {
    /// locate steamcmd -> download -> build mod map -> install.
    #[instrument(skip_all, fields(server = %server.name, game_root = %self.game_root))]
    pub fn update(&self, server: &ServerDescriptor) -> Result<Vec<Utf8PathBuf>, SError> {
        let exe = locate_steamcmd(self.steamcmd_override)
            .map_err(SError::at(SyncStage::LocateFetcher))?;

        // No library means nowhere to install from; skip the download.
        self.locator
            .locate()
            .map_err(SError::at(SyncStage::LocateLibrary))?;

        SteamCmd::new(exe, self.app_id)
            .download(self.runner, &server.mod_ids)
            .map_err(SError::at(SyncStage::Fetch))?;

        let mod_map = server
            .mod_map()
            .map_err(SError::at(SyncStage::BuildModMap))?;

        let installed = installer::install_mods(self.locator, &mod_map, self.game_root, self.app_id)
            .map_err(SError::at(SyncStage::Install))?;

        info!("Installed {} mods", installed.len());
        Ok(installed)
    }

    /// Removes every installed `@` mod folder from the game root.
    #[instrument(skip_all, fields(game_root = %self.game_root))]
    pub fn clean(&self) -> Result<Vec<Utf8PathBuf>, SError> {
        let removed = cleanup::purge(self.game_root).map_err(SError::at(SyncStage::Clean))?;
        info!("Removed {} mod folders", removed.len());
        Ok(removed)
    }
}
