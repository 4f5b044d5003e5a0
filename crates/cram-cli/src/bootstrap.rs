use anyhow::Context;
use cram_api::ApiClient;
use cram_auth::{Session, TokenStore};
use cram_config::CramConfig;

/// Load layered configuration, picking up a project-local `.env` first.
pub fn load_config() -> anyhow::Result<CramConfig> {
    CramConfig::load_with_dotenv().context("failed to load configuration")
}

/// Wire config into a ready API client: token store, stored session, HTTP client.
pub fn build_client(config: &CramConfig) -> ApiClient {
    let store = TokenStore::new(&config.auth.keyring_service, &config.auth.credentials_file);
    let session = Session::load(store);
    if let Some(source) = session.source() {
        tracing::debug!(source = source.as_str(), "loaded stored credentials");
    }

    ApiClient::new(&config.api.base_url, config.api.timeout_secs, session)
}
