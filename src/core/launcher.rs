use crate::config::AppSettings;
use crate::models::error::SError;
use crate::models::paths::installed_dir_name;
use crate::models::server::ServerDescriptor;
use crate::utils::process::CommandRunner;
use tracing::info;

const MOD_SEPARATOR: &str = ";";

/// `-mod=@a;@b`
pub fn mod_arg(mod_names: &[String]) -> String {
    let dirs: Vec<String> = mod_names.iter().map(|n| installed_dir_name(n)).collect();
    format!("-mod={}", dirs.join(MOD_SEPARATOR))
}

/// Arguments for `steam` that start the game and connect straight to `server`.
pub fn launch_args(settings: &AppSettings, server: &ServerDescriptor, player_name: &str) -> Vec<String> {
    let mut args = vec!["-applaunch".to_string(), settings.app_id.to_string()];
    args.extend(settings.launch_flags.iter().cloned());
    args.extend([
        format!("-name={}", player_name),
        format!("-connect={}", server.address),
        format!("-port={}", server.port),
        mod_arg(&server.mod_names),
    ]);
    args
}

pub fn launch(
    runner: &dyn CommandRunner,
    settings: &AppSettings,
    server: &ServerDescriptor,
    player_name: &str,
) -> Result<(), SError> {
    info!(
        "Joining {} at {}:{} as {}",
        server.name, server.address, server.port, player_name
    );

    let report = runner
        .run(&settings.launcher, &launch_args(settings, server, player_name))
        .map_err(|e| SError::LaunchFailed(format!("cannot start {}: {}", settings.launcher, e)))?;

    if !report.success() {
        return Err(SError::LaunchFailed(format!(
            "{} exited with {:?}",
            settings.launcher, report.code
        )));
    }
    Ok(())
}
