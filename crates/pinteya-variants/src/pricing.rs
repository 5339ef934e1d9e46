//! Fixed price tables for products priced by selector rather than by variant.

use rust_decimal::Decimal;

use crate::measure::{normalize_measure, width_key};

/// List and discounted price of one tape width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthPrice {
    pub list: Decimal,
    pub discounted: Decimal,
}

/// (width token, list cents, discounted cents)
const TAPE_WIDTH_PRICES: &[(&str, i64, i64)] = &[
    ("18MM", 214_100, 149_870),
    ("24MM", 285_400, 199_780),
    ("36MM", 428_800, 300_160),
    ("48MM", 570_900, 399_630),
];

/// (size token, multiplier in tenths)
const BRUSH_SIZE_MULTIPLIERS: &[(&str, i64)] = &[
    ("1/2\"", 10),
    ("1\"", 12),
    ("1-1/2\"", 14),
    ("2\"", 16),
    ("2-1/2\"", 18),
    ("3\"", 20),
    ("4\"", 24),
];

/// Price of a masking-tape width, e.g. `"18mm"` or `"18mm x 40m"`.
#[must_use]
pub fn width_price(width: &str) -> Option<WidthPrice> {
    let wanted = normalize_measure(width_key(width));
    TAPE_WIDTH_PRICES
        .iter()
        .find(|(token, _, _)| *token == wanted)
        .map(|&(_, list, discounted)| WidthPrice {
            list: Decimal::new(list, 2),
            discounted: Decimal::new(discounted, 2),
        })
}

/// Price multiplier for a brush size. Unknown or empty sizes yield `1`.
#[must_use]
pub fn brush_size_multiplier(size: &str) -> Decimal {
    let wanted = normalize_measure(size);
    BRUSH_SIZE_MULTIPLIERS
        .iter()
        .find(|(token, _)| *token == wanted)
        .map_or(Decimal::ONE, |&(_, tenths)| Decimal::new(tenths, 1))
}

/// Scales a base price by the brush size multiplier, rounded to cents.
#[must_use]
pub fn apply_size_multiplier(price: Decimal, size: &str) -> Decimal {
    (price * brush_size_multiplier(size)).round_dp(2)
}

/// `true` only when an original price exists and is strictly higher than
/// what the shopper pays.
#[must_use]
pub fn has_discount(original: Option<Decimal>, effective: Decimal) -> bool {
    original.is_some_and(|o| o > effective)
}
