//! Option lists for the quick-view selectors.

use std::cmp::Ordering;
use std::collections::HashSet;

use pinteya_core::{Product, ProductGroup, ProductKind, Variant};

use crate::measure::{leading_quantity, normalize_measure, split_measure_list, width_key};

/// Capacities offered by active variants, one per normalized token, ordered
/// by leading quantity.
#[must_use]
pub fn available_capacities(variants: &[Variant]) -> Vec<String> {
    let raw = variants
        .iter()
        .filter(|v| v.is_active)
        .filter_map(|v| v.measure.as_deref());
    sorted_measures(dedupe_measures(raw))
}

/// Distinct color names of active variants, sorted alphabetically.
#[must_use]
pub fn available_colors(variants: &[Variant]) -> Vec<String> {
    let mut colors = dedupe_ci(
        variants
            .iter()
            .filter(|v| v.is_active)
            .filter_map(|v| v.color_name.as_deref()),
    );
    colors.sort_by_key(|c| c.to_lowercase());
    colors
}

/// Distinct finishes of active variants, in catalog order.
#[must_use]
pub fn available_finishes(variants: &[Variant]) -> Vec<String> {
    dedupe_ci(
        variants
            .iter()
            .filter(|v| v.is_active)
            .filter_map(|v| v.finish.as_deref()),
    )
}

/// Finishes offered for one color.
#[must_use]
pub fn finishes_for_color(variants: &[Variant], color: &str) -> Vec<String> {
    dedupe_ci(
        variants
            .iter()
            .filter(|v| v.is_active && v.matches_color(color))
            .filter_map(|v| v.finish.as_deref()),
    )
}

/// Tape widths (`"18mm"` from `"18mm x 40m"`) of active variants, narrowest
/// first.
#[must_use]
pub fn available_widths(variants: &[Variant]) -> Vec<String> {
    let raw = variants
        .iter()
        .filter(|v| v.is_active)
        .filter_map(|v| v.measure.as_deref())
        .map(width_key);
    sorted_measures(dedupe_measures(raw))
}

/// Measures of sibling products. `explicit_measure` and `weight` are used
/// when the generic `measure` label is missing.
#[must_use]
pub fn related_measures(group: &ProductGroup) -> Vec<String> {
    let raw = group.products.iter().filter_map(|p| {
        p.measure
            .as_deref()
            .or(p.explicit_measure.as_deref())
            .or(p.weight.as_deref())
    });
    sorted_measures(dedupe_measures(raw))
}

/// Capacity options for the modal, from the first source that yields any:
/// variants, sibling products, the product's own measure list, then the
/// kind's defaults.
#[must_use]
pub fn capacities_for(
    product: &Product,
    kind: ProductKind,
    variants: &[Variant],
    group: &ProductGroup,
) -> Vec<String> {
    let from_variants = available_capacities(variants);
    if !from_variants.is_empty() {
        return from_variants;
    }

    let from_related = related_measures(group);
    if !from_related.is_empty() {
        return from_related;
    }

    if let Some(measure) = product.measure.as_deref() {
        let listed = split_measure_list(measure);
        let from_product = sorted_measures(dedupe_measures(listed.iter().map(String::as_str)));
        if !from_product.is_empty() {
            return from_product;
        }
    }

    kind.default_capacities()
        .iter()
        .map(|c| (*c).to_owned())
        .collect()
}

/// Keeps the first spelling of each normalized measure.
fn dedupe_measures<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.map(str::trim)
        .filter(|m| !m.is_empty())
        .filter(|m| seen.insert(normalize_measure(m)))
        .map(str::to_owned)
        .collect()
}

/// Keeps the first spelling of each value, compared case-insensitively.
fn dedupe_ci<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .map(str::to_owned)
        .collect()
}

/// Numeric measures ascending; measures without a leading number keep their
/// relative order after the numeric ones.
fn sorted_measures(mut measures: Vec<String>) -> Vec<String> {
    measures.sort_by(|a, b| match (leading_quantity(a), leading_quantity(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    measures
}
