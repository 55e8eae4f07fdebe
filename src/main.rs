use clap::Parser;
use dzjoin_lib::cli::Cli;
use dzjoin_lib::config;
use dzjoin_lib::utils::logging;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(config::log_dir().as_deref(), cli.verbose);

    match dzjoin_lib::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
