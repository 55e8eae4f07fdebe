use camino::Utf8PathBuf;
use derive_more::Display;

/// Pipeline stage an update or clean request was in when it failed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    #[display("locating steamcmd")]
    LocateFetcher,
    #[display("locating steam library")]
    LocateLibrary,
    #[display("downloading workshop items")]
    Fetch,
    #[display("building mod map")]
    BuildModMap,
    #[display("installing mods")]
    Install,
    #[display("cleaning installed mods")]
    Clean,
}

#[derive(Debug, Display)]
pub enum SError {
    #[display("steam library not found (probed {probed:?})")]
    LibraryNotFound { probed: Vec<Utf8PathBuf> },
    #[display("workshop download failed: {_0}")]
    FetchFailed(String),
    #[display("failed to clean {path}: {source}")]
    CleanupFailed {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[display("failed to install mod '{mod_name}': {source}")]
    InstallFailed {
        mod_name: String,
        source: std::io::Error,
    },
    #[display("server lists {ids} mod ids but {names} mod names")]
    MalformedDescriptor { ids: usize, names: usize },
    #[display("{_0} not found or not installed")]
    ToolNotFound(String),
    #[display("server query failed: {_0}")]
    ServerQuery(String),
    #[display("{_0} not defined")]
    MissingEnv(String),
    #[display("config error: {_0}")]
    Config(String),
    #[display("game launch failed: {_0}")]
    LaunchFailed(String),
    #[display("{_0} is running, close the game first")]
    GameRunning(String),
    #[display("io error: {_0}")]
    IOError(String),
    #[display("{stage} failed: {source}")]
    Stage {
        stage: SyncStage,
        source: Box<SError>,
    },
}

impl SError {
    /// Wraps an error with the pipeline stage it surfaced in.
    pub fn at(stage: SyncStage) -> impl FnOnce(SError) -> SError {
        move |source| SError::Stage {
            stage,
            source: Box::new(source),
        }
    }

    /// The innermost error, with any stage context stripped.
    pub fn root(&self) -> &SError {
        match self {
            SError::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}

impl std::error::Error for SError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SError::CleanupFailed { source, .. } | SError::InstallFailed { source, .. } => {
                Some(source)
            }
            SError::Stage { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<reqwest::Error> for SError {
    fn from(e: reqwest::Error) -> Self {
        SError::ServerQuery(e.to_string())
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ServerQuery(format!("invalid server json: {}", e))
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::Config(e.to_string())
    }
}
