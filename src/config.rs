use std::{env, net::SocketAddr};

pub const DEFAULT_DATA_WEBHOOK_URL: &str =
    "https://wdata151.ru/webhook/5f582d4d-69d8-4269-80ae-e40da797dca0";
pub const DEFAULT_PROMPT_WEBHOOK_URL: &str =
    "https://wdata151.ru/webhook/60389f6f-16e2-494c-b16f-e8559de8c9f8";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_webhook_url: String,
    pub prompt_webhook_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_webhook_url: DEFAULT_DATA_WEBHOOK_URL.to_string(),
            prompt_webhook_url: DEFAULT_PROMPT_WEBHOOK_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            data_webhook_url: non_empty("DATA_WEBHOOK_URL").unwrap_or(defaults.data_webhook_url),
            prompt_webhook_url: non_empty("PROMPT_WEBHOOK_URL")
                .unwrap_or(defaults.prompt_webhook_url),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
