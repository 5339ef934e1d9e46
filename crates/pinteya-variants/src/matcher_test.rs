use super::*;
use crate::fixtures::{make_variant, priced};

fn paint_variants() -> Vec<Variant> {
    vec![
        priced(make_variant(1, "Blanco", "1L", Some("Mate")), "1200", None),
        priced(make_variant(2, "Blanco", "4 Litros", Some("Mate")), "3500", Some("3000")),
        priced(make_variant(3, "Blanco", "4L", Some("Satinado")), "3900", None),
        priced(make_variant(4, "Negro", "4LT", Some("Mate")), "3600", None),
        priced(make_variant(5, "Negro", "20L", Some("Brillante")), "14000", None),
    ]
}

// -----------------------------------------------------------------------
// find_variant_by_selection
// -----------------------------------------------------------------------

#[test]
fn exact_color_and_capacity_match() {
    let variants = paint_variants();
    let found = find_variant_by_selection(&variants, Some("Blanco"), "4L", None).unwrap();
    assert_eq!(found.id, 2);
    assert_eq!(found.effective_price().to_string(), "3000");
}

#[test]
fn color_match_ignores_case_and_measure_spelling() {
    let variants = paint_variants();
    let found = find_variant_by_selection(&variants, Some("  negro "), "4 lts", None).unwrap();
    assert_eq!(found.id, 4);
}

#[test]
fn finish_narrows_exact_match() {
    let variants = paint_variants();
    let found =
        find_variant_by_selection(&variants, Some("Blanco"), "4L", Some("satinado")).unwrap();
    assert_eq!(found.id, 3);
}

#[test]
fn falls_back_to_measure_and_finish_when_color_missing() {
    let variants = paint_variants();
    let found =
        find_variant_by_selection(&variants, Some("Verde"), "4L", Some("Satinado")).unwrap();
    assert_eq!(found.id, 3);
}

#[test]
fn falls_back_to_capacity_only() {
    let variants = paint_variants();
    let found = find_variant_by_selection(&variants, Some("Verde"), "20 litros", None).unwrap();
    assert_eq!(found.id, 5);
}

#[test]
fn unknown_capacity_returns_none() {
    let variants = paint_variants();
    assert!(find_variant_by_selection(&variants, Some("Blanco"), "10L", None).is_none());
}

#[test]
fn blank_capacity_returns_none() {
    let variants = paint_variants();
    assert!(find_variant_by_selection(&variants, Some("Blanco"), "", None).is_none());
    assert!(find_variant_by_selection(&variants, Some("Blanco"), "   ", Some("Mate")).is_none());
}

#[test]
fn color_matches_by_hex_swatch() {
    let mut variants = paint_variants();
    variants[3].color_hex = Some("#000000".to_owned());
    let found = find_variant_by_selection(&variants, Some("#000000"), "4L", None).unwrap();
    assert_eq!(found.id, 4);
}

#[test]
fn empty_variant_list_returns_none() {
    assert!(find_variant_by_selection(&[], Some("Blanco"), "4L", None).is_none());
}

// -----------------------------------------------------------------------
// Supplementary lookups
// -----------------------------------------------------------------------

#[test]
fn by_capacity_uses_normalized_measure() {
    let variants = paint_variants();
    assert_eq!(find_variant_by_capacity(&variants, "1 litro").unwrap().id, 1);
    assert!(find_variant_by_capacity(&variants, "").is_none());
}

#[test]
fn by_width_matches_tape_measures() {
    let mut variants = vec![
        make_variant(10, "Blanco", "18mm x 40m", None),
        make_variant(11, "Blanco", "24mm x 40m", None),
        make_variant(12, "Blanco", "36MM X 40M", None),
    ];
    assert_eq!(find_variant_by_width(&variants, "24mm").unwrap().id, 11);
    assert_eq!(find_variant_by_width(&variants, "36 mm").unwrap().id, 12);
    assert!(find_variant_by_width(&variants, "48mm").is_none());

    variants[1].is_active = false;
    assert!(find_variant_by_width(&variants, "24mm").is_none());
}

#[test]
fn by_finish_prefers_capacity_and_color() {
    let variants = paint_variants();
    let found = find_variant_by_finish(&variants, "Mate", Some("4L"), Some("Negro")).unwrap();
    assert_eq!(found.id, 4);

    let found = find_variant_by_finish(&variants, "Mate", Some("4L"), Some("Rojo")).unwrap();
    assert_eq!(found.id, 2);

    let found = find_variant_by_finish(&variants, "Brillante", Some("1L"), None).unwrap();
    assert_eq!(found.id, 5);

    assert!(find_variant_by_finish(&variants, "Semimate", None, None).is_none());
    assert!(find_variant_by_finish(&variants, " ", None, None).is_none());
}

#[test]
fn default_variant_prefers_active_default() {
    let mut variants = paint_variants();
    assert_eq!(default_variant(&variants).unwrap().id, 1);

    variants[2].is_default = true;
    assert_eq!(default_variant(&variants).unwrap().id, 3);

    variants[2].is_active = false;
    assert_eq!(default_variant(&variants).unwrap().id, 1);

    for v in &mut variants {
        v.is_active = false;
    }
    assert_eq!(default_variant(&variants).unwrap().id, 1);
    assert!(default_variant(&[]).is_none());
}
