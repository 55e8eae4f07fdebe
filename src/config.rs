pub mod env;

use crate::models::error::SError;
use camino::Utf8PathBuf;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "dzjoin";

/// Persisted settings, `default-config.toml` in the per-user config dir.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub version: u8,
    /// Server list endpoint; the server id is appended as the last segment.
    pub api_base: String,
    /// Steam app id of the game, also the workshop content folder name.
    pub app_id: u32,
    /// Game folder relative to the steam library.
    pub game_dir: String,
    /// Command used to start the game client.
    pub launcher: String,
    pub launch_flags: Vec<String>,
    /// Process names that mean the game is still running.
    pub game_processes: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 0,
            api_base: "https://api.battlemetrics.com/servers".into(),
            app_id: 221100,
            game_dir: "common/DayZ".into(),
            launcher: "steam".into(),
            launch_flags: vec![
                "-noLauncher".into(),
                "-nosplash".into(),
                "-skipintro".into(),
            ],
            game_processes: vec!["DayZ_x64.exe".into(), "DayZ".into()],
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, SError> {
        Ok(confy::load(APP_NAME, None)?)
    }
}

/// Per-user config directory holding the settings file and `.env`.
/// Created owner-only on first use.
pub fn config_dir() -> Result<Utf8PathBuf, SError> {
    let file = confy::get_configuration_file_path(APP_NAME, None)?;
    let dir = file
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| SError::Config(format!("no parent for {}", file.display())))?;
    let dir = Utf8PathBuf::from_path_buf(dir)
        .map_err(|p| SError::Config(format!("non UTF-8 config path: {}", p.display())))?;

    create_private_dir(&dir)?;
    Ok(dir)
}

/// Where the rolling log files go, if the platform has a data dir.
pub fn log_dir() -> Option<Utf8PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME)?;
    let dir = Utf8PathBuf::from_path_buf(dirs.data_local_dir().join("logs")).ok()?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn create_private_dir(dir: &Utf8PathBuf) -> Result<(), SError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(dir)
        .map_err(|e| SError::Config(format!("cannot create {}: {}", dir, e)))
}
