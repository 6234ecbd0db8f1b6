use crate::config::Config;
use crate::upstream::WebhookClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: WebhookClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: Arc::new(config),
            client: WebhookClient::new()?,
        })
    }
}
