use crate::models::error::SError;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};

pub const SERVER_VAR: &str = "DZJOIN_SERVER";
pub const NAME_VAR: &str = "DZJOIN_NAME";
pub const STEAMCMD_VAR: &str = "DZJOIN_STEAMCMD_PATH";

/// Per-user values that come from the environment (or the `.env` file).
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Opaque server id for the server list API.
    pub server_id: String,
    /// In-game display name.
    pub player_name: String,
    /// Overrides the `PATH` lookup of steamcmd.
    pub steamcmd_path: Option<Utf8PathBuf>,
}

impl EnvConfig {
    /// Reads `<config_dir>/.env` into the process environment, then the variables.
    pub fn load(config_dir: &Utf8Path) -> Result<Self, SError> {
        load_dotenv(config_dir);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| SError::MissingEnv(key.to_string()));

        Ok(Self {
            server_id: required(SERVER_VAR)?,
            player_name: required(NAME_VAR)?,
            steamcmd_path: get(STEAMCMD_VAR).map(Utf8PathBuf::from),
        })
    }
}

/// Returns whether a `.env` file was loaded. Variables already set in the
/// environment win over the file.
pub fn load_dotenv(config_dir: &Utf8Path) -> bool {
    let path = config_dir.join(".env");
    if !path.exists() {
        debug!("no .env at {}", path);
        return false;
    }

    match dotenv::from_path(&path) {
        Ok(()) => {
            debug!("loaded {}", path);
            true
        }
        Err(e) => {
            warn!("failed to load {}: {}", path, e);
            false
        }
    }
}
