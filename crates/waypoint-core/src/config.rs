//! Engine configuration.
//!
//! Configuration is an explicit value handed to the orchestrator. It can be
//! read from the environment once at startup with [`EngineConfig::from_env`];
//! nothing in the engine consults the environment afterwards.

use std::time::Duration;

/// Environment variable holding the completion service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the completion service base URL.
pub const SERVICE_URL_ENV: &str = "WAYPOINT_SERVICE_URL";
/// Environment variable overriding the completion model.
pub const MODEL_ENV: &str = "WAYPOINT_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for the optional external completion service.
#[derive(Clone, PartialEq)]
pub struct ServiceConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Creates a config with default endpoint, model and limits.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration of the plan orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Present only when a credential is configured
    pub service: Option<ServiceConfig>,
}

impl EngineConfig {
    /// Deterministic-only configuration.
    pub fn deterministic() -> Self {
        Self::default()
    }

    pub fn with_service(service: ServiceConfig) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Reads the service settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup. An unset or blank
    /// credential disables the service.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let service = present(API_KEY_ENV).map(|key| {
            let mut service = ServiceConfig::new(key.trim());
            if let Some(url) = present(SERVICE_URL_ENV) {
                service = service.with_base_url(url);
            }
            if let Some(model) = present(MODEL_ENV) {
                service = service.with_model(model);
            }
            service
        });

        Self { service }
    }

    pub fn has_service(&self) -> bool {
        self.service.is_some()
    }
}
