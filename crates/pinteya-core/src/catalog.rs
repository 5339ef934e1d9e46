//! Catalog entities as the quick-view logic consumes them.
//!
//! The storefront API returns loosely shaped JSON (prices as numbers or
//! strings, several image layouts). These types are the validated form:
//! required fields are plain values, optional fields are `Option`, and only
//! `pinteya-client`'s normalization step ever builds them from the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Positive numeric identifier of a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Parses a product identifier as it arrives from a listing card or URL.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProductId`] unless the trimmed input is a
    /// positive base-10 integer.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(CoreError::InvalidProductId(raw.to_string())),
        }
    }

    /// Wraps an already-validated id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProductId`] when `id` is zero or negative.
    pub fn new(id: i64) -> Result<Self, CoreError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(CoreError::InvalidProductId(id.to_string()))
        }
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Base catalog entity shown on listing cards and opened in the quick view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// List price.
    pub price: Decimal,
    /// Sale price, when the product is on promotion.
    pub discounted_price: Option<Decimal>,
    pub stock: Option<u32>,
    /// Legacy single-image field.
    pub image: Option<String>,
    /// Gallery URLs in display order.
    pub images: Vec<String>,
    /// `image_url` joined from the product images table; wins over every
    /// other image source.
    pub api_image_url: Option<String>,
    /// Free-text measure, sometimes a list such as `"1L, 4L, 20L"`.
    pub measure: Option<String>,
}

impl Product {
    /// Sale price when set, list price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discounted_price.unwrap_or(self.price)
    }
}

/// A purchasable configuration (color, measure, finish) of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub product_id: ProductId,
    pub color_name: Option<String>,
    /// `#RRGGBB` swatch color.
    pub color_hex: Option<String>,
    /// Free-text measure, e.g. `"4L"`, `"4 Litros"`, `"18mm x 40m"`.
    pub measure: Option<String>,
    /// Surface finish, e.g. `"Brillante"`, `"Satinado"`, `"Mate"`.
    pub finish: Option<String>,
    pub price_list: Decimal,
    pub price_sale: Option<Decimal>,
    pub stock: Option<u32>,
    pub is_active: bool,
    pub is_default: bool,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Variant {
    /// Sale price when set, list price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.price_sale.unwrap_or(self.price_list)
    }

    /// `true` when the variant's color name matches `color` ignoring case and
    /// surrounding whitespace, or when `color` is a `#hex` equal to the
    /// variant's swatch.
    #[must_use]
    pub fn matches_color(&self, color: &str) -> bool {
        let wanted = color.trim();
        if wanted.is_empty() {
            return false;
        }
        if wanted.starts_with('#') {
            if let Some(hex) = self.color_hex.as_deref() {
                if hex.trim().eq_ignore_ascii_case(wanted) {
                    return true;
                }
            }
        }
        self.color_name
            .as_deref()
            .is_some_and(|name| name.trim().to_lowercase() == wanted.to_lowercase())
    }

    /// `true` when the variant's finish equals `finish` ignoring case.
    #[must_use]
    pub fn matches_finish(&self, finish: &str) -> bool {
        self.finish
            .as_deref()
            .is_some_and(|f| f.trim().to_lowercase() == finish.trim().to_lowercase())
    }
}

/// A sibling catalog row sold as its own product (e.g. a different pack size)
/// rather than as a [`Variant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub discounted_price: Option<Decimal>,
    pub stock: Option<u32>,
    /// Generic measure label as served by the related-products endpoint. May
    /// be derived from the product name upstream.
    pub measure: Option<String>,
    /// The `medida` column, set explicitly by catalog editors.
    pub explicit_measure: Option<String>,
    /// The `peso` column, set explicitly by catalog editors.
    pub weight: Option<String>,
    pub image_url: Option<String>,
}

impl RelatedProduct {
    /// Sale price when set, list price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discounted_price.unwrap_or(self.price)
    }
}

/// Sibling products sharing a base name, e.g. every pack size of
/// `"Látex Interior Blanco"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub base_name: String,
    pub products: Vec<RelatedProduct>,
}

impl ProductGroup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
