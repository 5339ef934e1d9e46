//! Product-id corrections for catalog rows whose variants are recorded under
//! a different product.
//!
//! Entries are matched by exact product id. Names are never consulted.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Product opened in the quick view.
    pub product_id: i64,
    /// Product whose variant rows should be fetched instead.
    pub variants_from: i64,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AliasesFile {
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
}

/// Validated lookup from opened product id to variant-source product id.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    map: HashMap<ProductId, ProductId>,
}

impl AliasTable {
    /// Builds a table from raw entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for non-positive ids, self-aliases,
    /// duplicate source ids, or chains (a target that is itself aliased).
    pub fn from_entries(entries: &[AliasEntry]) -> Result<Self, ConfigError> {
        let mut map = HashMap::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let from = ProductId::new(entry.product_id).map_err(|_| {
                ConfigError::Validation(format!(
                    "alias product_id must be positive, got {}",
                    entry.product_id
                ))
            })?;
            let to = ProductId::new(entry.variants_from).map_err(|_| {
                ConfigError::Validation(format!(
                    "alias variants_from must be positive, got {}",
                    entry.variants_from
                ))
            })?;

            if from == to {
                return Err(ConfigError::Validation(format!(
                    "product {from} is aliased to itself"
                )));
            }
            if !seen.insert(from) {
                return Err(ConfigError::Validation(format!(
                    "duplicate alias for product {from}"
                )));
            }
            map.insert(from, to);
        }

        if let Some((from, to)) = map.iter().find(|(_, to)| map.contains_key(*to)) {
            return Err(ConfigError::Validation(format!(
                "alias chain: product {from} points at {to}, which is itself aliased"
            )));
        }

        Ok(Self { map })
    }

    /// The correction shipped with the storefront: product 38's variants live
    /// under product 34.
    #[must_use]
    pub fn builtin() -> Self {
        let mut map = HashMap::new();
        if let (Ok(from), Ok(to)) = (ProductId::new(38), ProductId::new(34)) {
            map.insert(from, to);
        }
        Self { map }
    }

    /// Id to fetch variants for when `id` is opened.
    #[must_use]
    pub fn variant_source(&self, id: ProductId) -> ProductId {
        self.map.get(&id).copied().unwrap_or(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Load and validate the alias table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_aliases(path: &Path) -> Result<AliasTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AliasFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: AliasesFile = serde_yaml::from_str(&content).map_err(ConfigError::AliasFileParse)?;

    AliasTable::from_entries(&file.aliases)
}

#[cfg(test)]
#[path = "aliases_test.rs"]
mod tests;
