use crate::models::error::SError;
use crate::models::server::ServerDescriptor;
use std::collections::BTreeMap;

/// Workshop id -> display name for every mod a server requires.
pub type ModMap = BTreeMap<u64, String>;

/// Zips the server's parallel id and name lists into a [`ModMap`].
///
/// The lists come from a third party; a length mismatch is reported as
/// [`SError::MalformedDescriptor`] instead of silently pairing the wrong names.
pub fn build_mod_map(ids: &[u64], names: &[String]) -> Result<ModMap, SError> {
    if ids.len() != names.len() {
        return Err(SError::MalformedDescriptor {
            ids: ids.len(),
            names: names.len(),
        });
    }

    Ok(ids.iter().copied().zip(names.iter().cloned()).collect())
}

impl ServerDescriptor {
    pub fn mod_map(&self) -> Result<ModMap, SError> {
        build_mod_map(&self.mod_ids, &self.mod_names)
    }
}
