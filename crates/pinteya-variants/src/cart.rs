//! Cart line assembly and the outbound cart/wishlist interface.

use chrono::{DateTime, Utc};
use pinteya_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CartError;
use crate::measure::{normalize_measure, width_key};
use crate::resolve::{ActiveSource, ResolvedDisplay};
use crate::selection::Selection;

/// One line handed to the cart store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub line_id: Uuid,
    pub product_id: ProductId,
    pub variant_id: Option<i64>,
    pub related_product_id: Option<ProductId>,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub original_unit_price: Decimal,
    pub discounted_unit_price: Option<Decimal>,
    /// Normalized measure token.
    pub measure: Option<String>,
    pub color: Option<String>,
    pub capacity: Option<String>,
    pub finish: Option<String>,
    pub width: Option<String>,
    pub size: Option<String>,
    pub grain: Option<String>,
    pub stock: u32,
    pub image_url: String,
    pub currency_code: String,
    pub added_at: DateTime<Utc>,
}

/// Receives confirmed cart and wishlist actions. The cart store behind it is
/// not part of this crate.
pub trait CartHandler {
    fn add_to_cart(&mut self, product: &Product, line: CartLineItem);
    fn add_to_wishlist(&mut self, product: &Product);
}

/// Validates the request against the resolved stock and builds the line.
///
/// # Errors
///
/// - [`CartError::InvalidQuantity`] when `selection.quantity` is 0.
/// - [`CartError::OutOfStock`] when the resolved stock is 0.
/// - [`CartError::InsufficientStock`] when more units are requested than
///   are in stock.
pub fn assemble_line(
    product: &Product,
    source: &ActiveSource,
    selection: &Selection,
    display: &ResolvedDisplay,
    currency_code: &str,
) -> Result<CartLineItem, CartError> {
    let requested = selection.quantity;
    let available = display.effective_stock;

    let rejection = if requested == 0 {
        Some(CartError::InvalidQuantity)
    } else if available == 0 {
        Some(CartError::OutOfStock)
    } else if requested > available {
        Some(CartError::InsufficientStock {
            requested,
            available,
        })
    } else {
        None
    };
    if let Some(err) = rejection {
        tracing::warn!(
            product_id = %product.id,
            requested,
            available,
            reason = %err,
            "add to cart rejected"
        );
        return Err(err);
    }

    let variant = source.variant();
    let related = source.related();

    let (product_id, name) = match related {
        Some(r) => (r.id, r.name.clone()),
        None => (product.id, product.name.clone()),
    };

    let measure = variant
        .and_then(|v| v.measure.as_deref())
        .or_else(|| related.and_then(|r| r.measure.as_deref().or(r.explicit_measure.as_deref())))
        .or(selection.capacity.as_deref())
        .or(product.measure.as_deref())
        .map(normalize_measure)
        .filter(|m| !m.is_empty());

    let finish = selection
        .finish
        .clone()
        .or_else(|| variant.and_then(|v| v.finish.clone()));

    Ok(CartLineItem {
        line_id: Uuid::new_v4(),
        product_id,
        variant_id: variant.map(|v| v.id),
        related_product_id: related.map(|r| r.id),
        name,
        quantity: requested,
        unit_price: display.effective_price,
        original_unit_price: display.original_price.unwrap_or(display.effective_price),
        discounted_unit_price: display.has_discount.then_some(display.effective_price),
        measure,
        color: selection.color.clone(),
        capacity: selection.capacity.clone(),
        finish,
        width: selection.width.as_deref().map(|w| width_key(w).to_owned()),
        size: selection.size.clone(),
        grain: selection.grain.clone(),
        stock: available,
        image_url: display.image_url.clone(),
        currency_code: currency_code.to_owned(),
        added_at: Utc::now(),
    })
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
