pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use crate::cli::Cli;
use crate::config::env::EnvConfig;
use crate::config::AppSettings;
use crate::core::library::LibraryLocator;
use crate::core::server_api::ServerApi;
use crate::core::sync::SyncPipeline;
use crate::core::launcher;
use crate::models::error::SError;
use crate::models::paths::LibPathRules;
use crate::utils::process::{ProcessChecker, SystemRunner};
use sysinfo::System;
use tracing::{info, instrument};

/// One invocation: query the server, optionally clean and update the
/// installed mods, then join unless told not to.
#[instrument(skip_all)]
pub fn run(cli: &Cli) -> Result<(), SError> {
    let config_dir = config::config_dir()?;
    let settings = AppSettings::load()?;
    let env = EnvConfig::load(&config_dir)?;

    let server = ServerApi::new(&settings.api_base)?
        .fetch(&env.server_id)?
        .descriptor();
    info!(
        "Server '{}' at {}:{} requires {} mods",
        server.name,
        server.address,
        server.port,
        server.mod_ids.len()
    );

    let runner = SystemRunner;

    if cli.clean || cli.update {
        if let Some(name) = ProcessChecker::find_running(&mut System::new(), &settings.game_processes) {
            return Err(SError::GameRunning(name));
        }

        let locator = LibraryLocator::from_user_home()?;
        let game_root = LibPathRules::for_library(&locator.locate()?, &settings.game_dir).game;

        let pipeline = SyncPipeline {
            runner: &runner,
            locator: &locator,
            game_root: &game_root,
            app_id: settings.app_id,
            steamcmd_override: env.steamcmd_path.as_deref(),
        };

        if cli.clean {
            pipeline.clean()?;
        }
        if cli.update {
            pipeline.update(&server)?;
        }
    }

    if !cli.dont_join {
        launcher::launch(&runner, &settings, &server, &env.player_name)?;
    }

    Ok(())
}
