pub mod aliases;
pub mod app_config;
pub mod catalog;
pub mod config;
pub mod kind;

use thiserror::Error;

pub use aliases::{load_aliases, AliasEntry, AliasTable, AliasesFile};
pub use app_config::{AppConfig, Environment};
pub use catalog::{Product, ProductGroup, ProductId, RelatedProduct, Variant};
pub use config::{load_app_config, load_app_config_from_env};
pub use kind::ProductKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid product id: {0:?}")]
    InvalidProductId(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read alias file {path}: {source}")]
    AliasFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse alias file: {0}")]
    AliasFileParse(#[source] serde_yaml::Error),

    #[error("alias validation failed: {0}")]
    Validation(String),
}
