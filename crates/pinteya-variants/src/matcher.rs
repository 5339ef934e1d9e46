//! Picks the variant that satisfies the shopper's current selection.

use pinteya_core::Variant;

use crate::measure::{measures_match, normalize_measure, width_key};

/// Finds the best variant for a color / capacity / finish selection.
///
/// Tiers, each tried only when the previous one found nothing:
/// 1. measure, color and finish (finish ignored when none is selected);
/// 2. measure and finish, when both are selected;
/// 3. measure alone.
///
/// Blank `capacity` returns `None` without looking at `variants`.
#[must_use]
pub fn find_variant_by_selection<'a>(
    variants: &'a [Variant],
    color: Option<&str>,
    capacity: &str,
    finish: Option<&str>,
) -> Option<&'a Variant> {
    let wanted = normalize_measure(capacity);
    if wanted.is_empty() {
        return None;
    }

    let color = color.map(str::trim).filter(|c| !c.is_empty());
    let finish = finish.map(str::trim).filter(|f| !f.is_empty());
    let measure_eq = |v: &Variant| {
        v.measure
            .as_deref()
            .is_some_and(|m| normalize_measure(m) == wanted)
    };

    if let Some(color) = color {
        let exact = variants.iter().find(|v| {
            measure_eq(v) && v.matches_color(color) && finish.is_none_or(|f| v.matches_finish(f))
        });
        if exact.is_some() {
            return exact;
        }
    }

    if let Some(finish) = finish {
        let by_finish = variants
            .iter()
            .find(|v| measure_eq(v) && v.matches_finish(finish));
        if by_finish.is_some() {
            return by_finish;
        }
    }

    variants.iter().find(|v| measure_eq(v))
}

/// First variant whose measure normalizes to `capacity`.
#[must_use]
pub fn find_variant_by_capacity<'a>(variants: &'a [Variant], capacity: &str) -> Option<&'a Variant> {
    variants.iter().find(|v| {
        v.measure
            .as_deref()
            .is_some_and(|m| measures_match(m, capacity))
    })
}

/// First active variant whose measure starts with the width of `width`
/// (`"18mm"` matches `"18mm x 40m"`).
#[must_use]
pub fn find_variant_by_width<'a>(variants: &'a [Variant], width: &str) -> Option<&'a Variant> {
    let wanted = normalize_measure(width_key(width));
    if wanted.is_empty() {
        return None;
    }
    variants.iter().filter(|v| v.is_active).find(|v| {
        v.measure
            .as_deref()
            .is_some_and(|m| normalize_measure(width_key(m)) == wanted)
    })
}

/// Variant to show after the shopper picks a finish.
///
/// Prefers finish + capacity + color, then finish + capacity, then finish
/// alone. Capacity and color constrain only when selected.
#[must_use]
pub fn find_variant_by_finish<'a>(
    variants: &'a [Variant],
    finish: &str,
    capacity: Option<&str>,
    color: Option<&str>,
) -> Option<&'a Variant> {
    if finish.trim().is_empty() {
        return None;
    }
    let capacity = capacity.filter(|c| !c.trim().is_empty());
    let color = color.filter(|c| !c.trim().is_empty());
    let capacity_ok = |v: &Variant| {
        capacity.is_none_or(|c| v.measure.as_deref().is_some_and(|m| measures_match(m, c)))
    };

    variants
        .iter()
        .find(|v| {
            v.matches_finish(finish) && capacity_ok(v) && color.is_none_or(|c| v.matches_color(c))
        })
        .or_else(|| {
            variants
                .iter()
                .find(|v| v.matches_finish(finish) && capacity_ok(v))
        })
        .or_else(|| variants.iter().find(|v| v.matches_finish(finish)))
}

/// The variant preselected when the modal opens: the active `is_default`
/// one, else the first active one, else the first one.
#[must_use]
pub fn default_variant(variants: &[Variant]) -> Option<&Variant> {
    variants
        .iter()
        .find(|v| v.is_active && v.is_default)
        .or_else(|| variants.iter().find(|v| v.is_active))
        .or_else(|| variants.first())
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
