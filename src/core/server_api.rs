use crate::models::error::SError;
use crate::models::server::ServerResponse;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const APP_USER_AGENT: &str = concat!("dzjoin/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the server list API. One GET per run, no retries.
pub struct ServerApi {
    client: Client,
    base_url: String,
}

impl ServerApi {
    pub fn new(base_url: &str) -> Result<Self, SError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn server_url(&self, server_id: &str) -> String {
        format!("{}/{}", self.base_url, server_id)
    }

    #[instrument(skip(self))]
    pub fn fetch(&self, server_id: &str) -> Result<ServerResponse, SError> {
        let url = self.server_url(server_id);
        debug!("GET {}", url);

        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
