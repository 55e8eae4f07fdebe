use crate::models::error::SError;
use crate::models::paths::SteamLibraryCandidates;
use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use tracing::debug;

/// Finds the steam library (`.../steamapps`) by probing a fixed, ordered list.
#[derive(Debug, Clone)]
pub struct LibraryLocator {
    candidates: Vec<Utf8PathBuf>,
}

impl LibraryLocator {
    pub fn new(candidates: Vec<Utf8PathBuf>) -> Self {
        Self { candidates }
    }

    /// Native, legacy and flatpak steam layouts under `home`, in that order.
    pub fn for_home(home: &Utf8Path) -> Self {
        Self::new(
            SteamLibraryCandidates::new(home)
                .ordered()
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub fn from_user_home() -> Result<Self, SError> {
        let base = BaseDirs::new()
            .ok_or_else(|| SError::Config("cannot determine home directory".into()))?;
        let home = Utf8Path::from_path(base.home_dir()).ok_or_else(|| {
            SError::Config(format!("non UTF-8 home: {}", base.home_dir().display()))
        })?;
        Ok(Self::for_home(home))
    }

    pub fn candidates(&self) -> &[Utf8PathBuf] {
        &self.candidates
    }

    /// Every call probes again; nothing is cached and nothing is written.
    pub fn locate(&self) -> Result<Utf8PathBuf, SError> {
        let found = self.candidates.iter().find(|path| path.exists()).cloned();

        match found {
            Some(path) => {
                debug!("steam library at {}", path);
                Ok(path)
            }
            None => Err(SError::LibraryNotFound {
                probed: self.candidates.clone(),
            }),
        }
    }
}
