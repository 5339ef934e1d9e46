//! Storefront API response types.
//!
//! Every endpoint answers `{ "success": bool, "data": ..., "error": ... }`.
//! Catalog rows are loosely typed on the wire (prices and stock arrive as
//! numbers or numeric strings, images in several layouts), so those fields
//! are kept as [`serde_json::Value`] here and interpreted in
//! [`crate::normalize`].

use serde::Deserialize;
use serde_json::Value;

/// Top-level envelope for all storefront API responses.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/products/{id}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct WireProduct {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Either a plain name or `{ "name": ... }`.
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub discounted_price: Value,
    #[serde(default)]
    pub stock: Value,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Value,
    /// Primary image joined from the product images table.
    #[serde(default)]
    pub image_url: Option<String>,
    /// `medida` on older rows; sometimes a JSON array serialized as a string.
    #[serde(default, alias = "medida")]
    pub measure: Value,
}

// ---------------------------------------------------------------------------
// GET /api/products/{id}/variants
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct WireVariant {
    pub id: Value,
    #[serde(default)]
    pub product_id: Value,
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub measure: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default)]
    pub price_list: Value,
    #[serde(default)]
    pub price_sale: Value,
    #[serde(default)]
    pub stock: Value,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/products/{id}/related
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct WireProductGroup {
    #[serde(default, alias = "baseName")]
    pub base_name: Option<String>,
    #[serde(default)]
    pub products: Vec<WireRelatedProduct>,
}

#[derive(Debug, Deserialize)]
pub struct WireRelatedProduct {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub discounted_price: Value,
    #[serde(default)]
    pub stock: Value,
    #[serde(default)]
    pub measure: Option<String>,
    #[serde(default)]
    pub medida: Option<String>,
    #[serde(default)]
    pub peso: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Value,
}
