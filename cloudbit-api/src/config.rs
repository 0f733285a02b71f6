//! Client configuration
//!
//! A `ClientConfig` is fixed for the lifetime of a client. It can be built
//! explicitly or read from `CLOUDBIT_*` environment variables.

use crate::error::ConfigError;

/// Subscriptions endpoint of the public cloudBit API
pub const DEFAULT_SUBSCRIPTIONS_URL: &str = "https://api-http.littlebitscloud.cc/v2/subscriptions";

pub const ENV_AUTH_TOKEN: &str = "CLOUDBIT_AUTH_TOKEN";
pub const ENV_CALLBACK_URL: &str = "CLOUDBIT_CALLBACK_URL";
pub const ENV_SUBSCRIPTIONS_URL: &str = "CLOUDBIT_SUBSCRIPTIONS_URL";
pub const ENV_CALLBACK_TOKEN: &str = "CLOUDBIT_CALLBACK_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) auth_token: String,
    subscriptions_url: String,
    default_callback_url: String,
    callback_auth_token: Option<String>,
}

impl ClientConfig {
    pub fn new(auth_token: impl Into<String>, default_callback_url: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            subscriptions_url: DEFAULT_SUBSCRIPTIONS_URL.to_string(),
            default_callback_url: default_callback_url.into(),
            callback_auth_token: None,
        }
    }

    pub fn with_subscriptions_url(mut self, url: impl Into<String>) -> Self {
        self.subscriptions_url = url.into();
        self
    }

    /// Use a different token in the default callback URL than the one sent
    /// to the API
    pub fn with_callback_auth_token(mut self, token: impl Into<String>) -> Self {
        self.callback_auth_token = Some(token.into());
        self
    }

    /// Read configuration from `CLOUDBIT_*` environment variables
    ///
    /// `CLOUDBIT_AUTH_TOKEN` and `CLOUDBIT_CALLBACK_URL` are required.
    /// `CLOUDBIT_SUBSCRIPTIONS_URL` and `CLOUDBIT_CALLBACK_TOKEN` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let required = |name: &str| var(name).ok_or_else(|| ConfigError::Missing(name.to_string()));

        let mut config = Self::new(required(ENV_AUTH_TOKEN)?, required(ENV_CALLBACK_URL)?);
        if let Some(url) = var(ENV_SUBSCRIPTIONS_URL) {
            config = config.with_subscriptions_url(url);
        }
        if let Some(token) = var(ENV_CALLBACK_TOKEN) {
            config = config.with_callback_auth_token(token);
        }

        Ok(config)
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn subscriptions_url(&self) -> &str {
        &self.subscriptions_url
    }

    pub fn default_callback_url(&self) -> &str {
        &self.default_callback_url
    }

    /// Token appended to the default callback URL
    pub fn callback_auth_token(&self) -> &str {
        self.callback_auth_token.as_deref().unwrap_or(&self.auth_token)
    }

    /// Subscriber id used when the caller does not supply one
    pub fn default_subscriber_id(&self) -> String {
        format!("{}?auth_token={}", self.default_callback_url, self.callback_auth_token())
    }
}
