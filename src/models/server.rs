use serde::{Deserialize, Deserializer, Serialize};

/// The provider sends explicit `null` for unknown values; read them as the
/// field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /servers/{id}` on the server list API.
/// Every field defaults so partial documents still deserialize.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ServerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub data: ServerData,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ServerData {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: ServerAttributes,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub players: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_players: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: ServerDetails,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ServerDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub modded: bool,
    #[serde(rename = "modIds", deserialize_with = "null_as_default")]
    pub mod_ids: Vec<u64>,
    #[serde(rename = "modNames", deserialize_with = "null_as_default")]
    pub mod_names: Vec<String>,
    #[serde(rename = "serverSteamId", deserialize_with = "null_as_default")]
    pub server_steam_id: String,
}

/// What the sync pipeline and launcher need to know about a server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerDescriptor {
    pub name: String,
    pub address: String,
    pub port: u16,
    /// Positionally aligned with `mod_names`.
    pub mod_ids: Vec<u64>,
    pub mod_names: Vec<String>,
}

impl ServerResponse {
    pub fn descriptor(&self) -> ServerDescriptor {
        let attrs = &self.data.attributes;
        ServerDescriptor {
            name: attrs.name.clone(),
            address: attrs.ip.clone(),
            port: attrs.port,
            mod_ids: attrs.details.mod_ids.clone(),
            mod_names: attrs.details.mod_names.clone(),
        }
    }
}
