use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Storefront REST origin, e.g. `"https://www.pinteya.com"`.
    pub api_base_url: String,
    pub env: Environment,
    pub log_level: String,
    pub aliases_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// ISO 4217 code stamped on assembled cart lines.
    pub currency_code: String,
    /// Image shown when no product, variant, or sibling image is usable.
    pub placeholder_image: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("aliases_path", &self.aliases_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("currency_code", &self.currency_code)
            .field("placeholder_image", &self.placeholder_image)
            .finish()
    }
}
