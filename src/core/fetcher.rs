use crate::models::error::SError;
use crate::utils::process::{find_in_path_var, CommandRunner};
use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsStr;
use tracing::{debug, info};

pub const STEAMCMD: &str = "steamcmd";

/// Resolves the steamcmd executable: an explicit override wins, otherwise `PATH`.
pub fn locate_steamcmd(override_path: Option<&Utf8Path>) -> Result<Utf8PathBuf, SError> {
    locate_steamcmd_in(override_path, std::env::var_os("PATH").as_deref())
}

pub fn locate_steamcmd_in(
    override_path: Option<&Utf8Path>,
    path_var: Option<&OsStr>,
) -> Result<Utf8PathBuf, SError> {
    if let Some(path) = override_path {
        return if path.exists() {
            Ok(path.to_owned())
        } else {
            Err(SError::ToolNotFound(format!("{} at {}", STEAMCMD, path)))
        };
    }

    path_var
        .and_then(|p| find_in_path_var(STEAMCMD, p))
        .ok_or_else(|| SError::ToolNotFound(STEAMCMD.to_string()))
}

/// Drives steamcmd to download workshop items for one app.
#[derive(Debug, Clone)]
pub struct SteamCmd {
    pub exe: Utf8PathBuf,
    pub app_id: u32,
}

impl SteamCmd {
    pub fn new(exe: Utf8PathBuf, app_id: u32) -> Self {
        Self { exe, app_id }
    }

    /// `+login anonymous (+workshop_download_item <app> <id>)* +quit`
    pub fn download_args(&self, mod_ids: &[u64]) -> Vec<String> {
        let app_id = self.app_id.to_string();
        let mut args = vec!["+login".to_string(), "anonymous".to_string()];

        for id in mod_ids {
            args.extend([
                "+workshop_download_item".to_string(),
                app_id.clone(),
                id.to_string(),
            ]);
        }

        args.push("+quit".to_string());
        args
    }

    /// One steamcmd session for all items. Only the overall exit status is
    /// visible, so a single failed item fails the whole download.
    pub fn download(&self, runner: &dyn CommandRunner, mod_ids: &[u64]) -> Result<(), SError> {
        if mod_ids.is_empty() {
            debug!("no workshop items to download");
            return Ok(());
        }

        info!("Downloading {} workshop items with {}", mod_ids.len(), self.exe);
        let report = runner
            .run(self.exe.as_str(), &self.download_args(mod_ids))
            .map_err(|e| SError::FetchFailed(format!("cannot start {}: {}", self.exe, e)))?;

        if !report.success() {
            let code = report
                .code
                .map_or_else(|| "a signal".to_string(), |c| format!("code {}", c));
            return Err(SError::FetchFailed(format!(
                "{} exited with {}",
                self.exe, code
            )));
        }

        Ok(())
    }
}
