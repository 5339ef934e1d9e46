//! Price, stock and image shown for the current selection.

use pinteya_core::{Product, ProductKind, RelatedProduct, Variant};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::image::first_usable;
use crate::pricing::{apply_size_multiplier, has_discount, width_price};
use crate::selection::Selection;

/// Where the displayed values come from. A variant and a sibling product can
/// never be active at the same time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum ActiveSource {
    Variant(Variant),
    Related(RelatedProduct),
    #[default]
    Base,
}

impl ActiveSource {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            ActiveSource::Variant(_) => SourceKind::Variant,
            ActiveSource::Related(_) => SourceKind::Related,
            ActiveSource::Base => SourceKind::Base,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Option<&Variant> {
        match self {
            ActiveSource::Variant(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn related(&self) -> Option<&RelatedProduct> {
        match self {
            ActiveSource::Related(r) => Some(r),
            _ => None,
        }
    }

    /// Stock recorded on the variant or sibling row, if any.
    #[must_use]
    pub fn stock(&self) -> Option<u32> {
        match self {
            ActiveSource::Variant(v) => v.stock,
            ActiveSource::Related(r) => r.stock,
            ActiveSource::Base => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Variant,
    Related,
    Base,
}

/// Which rule produced the displayed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    Variant,
    WidthTable,
    Related,
    SizeMultiplier,
    Base,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDisplay {
    pub effective_price: Decimal,
    pub original_price: Option<Decimal>,
    pub has_discount: bool,
    pub effective_stock: u32,
    pub image_url: String,
    pub source: SourceKind,
    pub price_basis: PriceBasis,
}

/// Resolves what the modal shows.
///
/// Price, first rule that applies:
/// 1. active variant (sale, else list);
/// 2. tape width table, for tape products with a known width selected;
/// 3. active sibling product (discounted, else list);
/// 4. brush size multiplier over the base product's prices;
/// 5. base product (discounted, else list).
///
/// Stock is the first *defined* value of the active source's stock, then the
/// product's, then 0. A recorded 0 is kept.
///
/// The image is the first usable of the product's joined API image, the
/// variant image, the sibling image, the gallery, the legacy image field,
/// then `placeholder`.
#[must_use]
pub fn resolve_display(
    product: &Product,
    kind: ProductKind,
    source: &ActiveSource,
    selection: &Selection,
    placeholder: &str,
) -> ResolvedDisplay {
    let (effective_price, original_price, price_basis) =
        resolve_price(product, kind, source, selection);

    let effective_stock = source.stock().or(product.stock).unwrap_or(0);

    let candidates = [
        product.api_image_url.as_deref(),
        source.variant().and_then(|v| v.image_url.as_deref()),
        source.related().and_then(|r| r.image_url.as_deref()),
    ]
    .into_iter()
    .chain(product.images.iter().map(|i| Some(i.as_str())))
    .chain(std::iter::once(product.image.as_deref()));
    let image_url = first_usable(candidates).unwrap_or_else(|| placeholder.to_owned());

    ResolvedDisplay {
        effective_price,
        original_price,
        has_discount: has_discount(original_price, effective_price),
        effective_stock,
        image_url,
        source: source.kind(),
        price_basis,
    }
}

fn resolve_price(
    product: &Product,
    kind: ProductKind,
    source: &ActiveSource,
    selection: &Selection,
) -> (Decimal, Option<Decimal>, PriceBasis) {
    if let ActiveSource::Variant(v) = source {
        return (v.effective_price(), Some(v.price_list), PriceBasis::Variant);
    }

    if kind == ProductKind::Tape {
        if let Some(price) = selection.width.as_deref().and_then(width_price) {
            return (price.discounted, Some(price.list), PriceBasis::WidthTable);
        }
    }

    if let ActiveSource::Related(r) = source {
        return (r.effective_price(), Some(r.price), PriceBasis::Related);
    }

    if kind == ProductKind::Brush {
        if let Some(size) = selection.size.as_deref() {
            return (
                apply_size_multiplier(product.effective_price(), size),
                Some(apply_size_multiplier(product.price, size)),
                PriceBasis::SizeMultiplier,
            );
        }
    }

    (product.effective_price(), Some(product.price), PriceBasis::Base)
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
