use serde::Deserialize;

use crate::{backend::HttpProfileBackend, config::Config};

#[derive(Debug, Clone)]
pub struct AppState<B> {
    pub backend: B,
    pub config: Config,
}

impl lambda_app::ContextProvider<Config> for AppState<HttpProfileBackend> {
    async fn new(config: Config) -> Self {
        Self {
            backend: HttpProfileBackend::new(reqwest::Client::new()),
            config,
        }
    }
}

/// Query string as ordered pairs. Repeated keys are kept so the first
/// `user_id` wins.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct DeleteProfileQuery(Vec<(String, String)>);

impl DeleteProfileQuery {
    pub fn user_id(self) -> Option<String> {
        self.0
            .into_iter()
            .find(|(key, _)| key == "user_id")
            .map(|(_, value)| value)
    }
}
