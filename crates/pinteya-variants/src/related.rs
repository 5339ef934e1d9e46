//! Sibling-product fallback for capacities no variant covers.

use pinteya_core::RelatedProduct;

use crate::measure::normalize_measure;

/// Finds the sibling product sold in `capacity`.
///
/// The generic `measure` label is tried on every product first. Only when
/// none matches are the editor-set `explicit_measure` and `weight` columns
/// consulted. Comparison is whole-token equality after normalization, so
/// `"1L"` never matches `"10L"`.
#[must_use]
pub fn find_related_by_measure<'a>(
    products: &'a [RelatedProduct],
    capacity: &str,
) -> Option<&'a RelatedProduct> {
    let wanted = normalize_measure(capacity);
    if wanted.is_empty() {
        return None;
    }
    let eq = |m: Option<&str>| m.is_some_and(|m| normalize_measure(m) == wanted);

    products
        .iter()
        .find(|p| eq(p.measure.as_deref()))
        .or_else(|| {
            products
                .iter()
                .find(|p| eq(p.explicit_measure.as_deref()) || eq(p.weight.as_deref()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_related;

    #[test]
    fn matches_generic_measure() {
        let products = vec![
            make_related(20, Some("4L"), "3500"),
            make_related(21, Some("10 Litros"), "9000"),
        ];
        let found = find_related_by_measure(&products, "10L").unwrap();
        assert_eq!(found.id.get(), 21);
        assert_eq!(found.effective_price().to_string(), "9000");
    }

    #[test]
    fn never_matches_by_substring() {
        let products = vec![make_related(20, Some("10L"), "9000")];
        assert!(find_related_by_measure(&products, "1L").is_none());
    }

    #[test]
    fn second_pass_uses_explicit_columns() {
        let mut by_medida = make_related(30, None, "5000");
        by_medida.explicit_measure = Some("4 lts".to_owned());
        let mut by_peso = make_related(31, None, "8000");
        by_peso.weight = Some("20 kilos".to_owned());
        let products = vec![by_medida, by_peso];

        assert_eq!(find_related_by_measure(&products, "4L").unwrap().id.get(), 30);
        assert_eq!(find_related_by_measure(&products, "20KG").unwrap().id.get(), 31);
    }

    #[test]
    fn generic_measure_wins_over_explicit_columns() {
        let mut explicit = make_related(30, None, "5000");
        explicit.explicit_measure = Some("4L".to_owned());
        let generic = make_related(31, Some("4L"), "4800");
        let products = vec![explicit, generic];

        assert_eq!(find_related_by_measure(&products, "4L").unwrap().id.get(), 31);
    }

    #[test]
    fn blank_capacity_returns_none() {
        let products = vec![make_related(20, Some("4L"), "3500")];
        assert!(find_related_by_measure(&products, " ").is_none());
    }
}
