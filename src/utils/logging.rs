use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "dzjoin.log";

/// Installs the global subscriber: human-readable output on stderr, plus a
/// daily rolling file when `log_dir` is given. `RUST_LOG` overrides the level.
///
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init(log_dir: Option<&Utf8Path>, verbose: bool) -> Option<WorkerGuard> {
    let default_filter = if verbose {
        "info,dzjoin_lib=debug,dzjoin=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("dzjoin: logging disabled: {}", e);
    }

    guard
}
