//! Conversion from loosely typed storefront rows to the validated
//! [`pinteya_core`] catalog types.
//!
//! Required fields (ids, names, list prices) fail with
//! [`ClientError::Normalization`]; optional fields that cannot be read are
//! dropped.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use pinteya_core::{Product, ProductGroup, ProductId, RelatedProduct, Variant};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::ClientError;
use crate::types::{WireProduct, WireProductGroup, WireRelatedProduct, WireVariant};

/// Normalizes the product-detail row.
///
/// # Errors
///
/// Returns [`ClientError::Normalization`] when the id, name or list price is
/// missing or unreadable.
pub fn normalize_product(wire: WireProduct) -> Result<Product, ClientError> {
    let id = parse_product_id(&wire.id, "product")?;
    let context = format!("product {id}");

    let name = wire
        .name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| normalization(&context, "missing name"))?;
    let price = parse_decimal(&wire.price, "price", &context)?
        .ok_or_else(|| normalization(&context, "missing price"))?;
    let discounted_price = parse_decimal(&wire.discounted_price, "discounted_price", &context)?;

    Ok(Product {
        id,
        name,
        slug: non_empty(wire.slug),
        brand: non_empty(wire.brand),
        category: category_name(&wire.category),
        description: non_empty(wire.description),
        price,
        discounted_price,
        stock: parse_stock(&wire.stock),
        image: non_empty(wire.image),
        images: image_urls(&wire.images),
        api_image_url: non_empty(wire.image_url),
        measure: measure_text(&wire.measure),
    })
}

/// Normalizes one variant row. `owner` is used when the row omits its
/// `product_id`.
///
/// # Errors
///
/// Returns [`ClientError::Normalization`] when the id or list price is
/// missing or unreadable.
pub fn normalize_variant(wire: WireVariant, owner: ProductId) -> Result<Variant, ClientError> {
    let id = wire
        .id
        .as_i64()
        .or_else(|| wire.id.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| normalization("variant", format!("unreadable id {}", wire.id)))?;
    let context = format!("variant {id}");

    let product_id = if wire.product_id.is_null() {
        owner
    } else {
        parse_product_id(&wire.product_id, &context)?
    };
    let price_list = parse_decimal(&wire.price_list, "price_list", &context)?
        .ok_or_else(|| normalization(&context, "missing price_list"))?;
    let price_sale = parse_decimal(&wire.price_sale, "price_sale", &context)?;

    Ok(Variant {
        id,
        product_id,
        color_name: non_empty(wire.color_name),
        color_hex: non_empty(wire.color_hex),
        measure: non_empty(wire.measure),
        finish: non_empty(wire.finish),
        price_list,
        price_sale,
        stock: parse_stock(&wire.stock),
        is_active: wire.is_active.unwrap_or(true),
        is_default: wire.is_default.unwrap_or(false),
        image_url: non_empty(wire.image_url),
        created_at: parse_timestamp(wire.created_at.as_deref()),
        updated_at: parse_timestamp(wire.updated_at.as_deref()),
    })
}

/// Normalizes every variant row, skipping (and logging) rows that fail.
#[must_use]
pub fn normalize_variants(rows: Vec<WireVariant>, owner: ProductId) -> Vec<Variant> {
    rows.into_iter()
        .filter_map(|row| match normalize_variant(row, owner) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(product_id = %owner, error = %e, "skipping unreadable variant row");
                None
            }
        })
        .collect()
}

/// Normalizes one sibling-product row.
///
/// # Errors
///
/// Returns [`ClientError::Normalization`] when the id, name or price is
/// missing or unreadable.
pub fn normalize_related(wire: WireRelatedProduct) -> Result<RelatedProduct, ClientError> {
    let id = parse_product_id(&wire.id, "related product")?;
    let context = format!("related product {id}");

    let name = non_empty(wire.name).ok_or_else(|| normalization(&context, "missing name"))?;
    let price = parse_decimal(&wire.price, "price", &context)?
        .ok_or_else(|| normalization(&context, "missing price"))?;
    let discounted_price = parse_decimal(&wire.discounted_price, "discounted_price", &context)?;
    let image_url =
        non_empty(wire.image_url).or_else(|| image_urls(&wire.images).into_iter().next());

    Ok(RelatedProduct {
        id,
        name,
        price,
        discounted_price,
        stock: parse_stock(&wire.stock),
        measure: non_empty(wire.measure),
        explicit_measure: non_empty(wire.medida),
        weight: non_empty(wire.peso),
        image_url,
    })
}

/// Normalizes a sibling group, skipping (and logging) rows that fail.
#[must_use]
pub fn normalize_group(wire: WireProductGroup) -> ProductGroup {
    let products = wire
        .products
        .into_iter()
        .filter_map(|row| match normalize_related(row) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable related product row");
                None
            }
        })
        .collect();

    ProductGroup {
        base_name: wire.base_name.unwrap_or_default().trim().to_owned(),
        products,
    }
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

fn normalization(context: impl Into<String>, reason: impl Into<String>) -> ClientError {
    ClientError::Normalization {
        context: context.into(),
        reason: reason.into(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_product_id(value: &Value, context: &str) -> Result<ProductId, ClientError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|id| ProductId::new(id).ok()),
        Value::String(s) => ProductId::parse(s).ok(),
        _ => None,
    };
    parsed.ok_or_else(|| normalization(context, format!("unreadable product id {value}")))
}

/// Reads a price given as a JSON number or numeric string. `null` and empty
/// strings are `None`; negative amounts are rejected.
fn parse_decimal(value: &Value, field: &str, context: &str) -> Result<Option<Decimal>, ClientError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().to_owned(),
        other => {
            return Err(normalization(
                context,
                format!("{field} has unexpected type: {other}"),
            ))
        }
    };

    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| normalization(context, format!("{field} {text:?} is not a number: {e}")))?;
    if amount.is_sign_negative() {
        return Err(normalization(context, format!("{field} is negative: {amount}")));
    }
    Ok(Some(amount))
}

/// Reads stock from a number or numeric string (`"3"`, `"0.00"`). Fractions
/// are truncated and negative counts clamped to zero; unreadable values are
/// treated as unknown.
#[allow(clippy::cast_possible_truncation)] // fractional stock from spreadsheets
fn parse_stock(value: &Value) -> Option<u32> {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| Decimal::from_str(s).ok().and_then(|d| d.trunc().to_i64()))
        }
        _ => None,
    }?;
    Some(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn category_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(Some(s.clone())),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .and_then(|s| non_empty(Some(s.to_owned()))),
        _ => None,
    }
}

/// Gallery URLs from any of the layouts the storefront has served:
/// a single string, an array of strings, an array of `{ url }` /
/// `{ image_url }` objects, or `{ previews: [...] }`.
fn image_urls(value: &Value) -> Vec<String> {
    let mut urls = Vec::new();
    collect_image_urls(value, &mut urls);
    urls
}

fn collect_image_urls(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_owned());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_image_urls(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(previews) = map.get("previews") {
                collect_image_urls(previews, out);
            } else if let Some(url) = map.get("url").or_else(|| map.get("image_url")) {
                collect_image_urls(url, out);
            }
        }
        _ => {}
    }
}

/// Product measure text. Older rows store a JSON array as a string
/// (`"[\"4L\",\"20L\"]"`); its entries are joined into a measure list.
fn measure_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                if let Ok(items) = serde_json::from_str::<Value>(trimmed) {
                    if let Some(joined) = join_measures(&items) {
                        return Some(joined);
                    }
                }
            }
            non_empty(Some(trimmed.to_owned()))
        }
        Value::Array(_) => join_measures(value),
        _ => None,
    }
}

fn join_measures(items: &Value) -> Option<String> {
    let parts: Vec<&str> = items
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
