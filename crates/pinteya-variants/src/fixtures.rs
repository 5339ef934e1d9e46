//! Catalog builders shared by the unit tests.

use pinteya_core::{Product, ProductGroup, ProductId, RelatedProduct, Variant};
use rust_decimal::Decimal;

pub(crate) fn pid(raw: i64) -> ProductId {
    ProductId::new(raw).unwrap()
}

pub(crate) fn dec(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

pub(crate) fn make_product(name: &str) -> Product {
    Product {
        id: pid(10),
        name: name.to_owned(),
        slug: None,
        brand: Some("Alba".to_owned()),
        category: None,
        description: None,
        price: dec("3500"),
        discounted_price: None,
        stock: Some(12),
        image: None,
        images: vec![],
        api_image_url: None,
        measure: None,
    }
}

pub(crate) fn make_variant(id: i64, color: &str, measure: &str, finish: Option<&str>) -> Variant {
    Variant {
        id,
        product_id: pid(10),
        color_name: Some(color.to_owned()),
        color_hex: None,
        measure: Some(measure.to_owned()),
        finish: finish.map(str::to_owned),
        price_list: dec("3500"),
        price_sale: None,
        stock: Some(8),
        is_active: true,
        is_default: false,
        image_url: None,
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn priced(mut variant: Variant, list: &str, sale: Option<&str>) -> Variant {
    variant.price_list = dec(list);
    variant.price_sale = sale.map(dec);
    variant
}

pub(crate) fn make_related(id: i64, measure: Option<&str>, price: &str) -> RelatedProduct {
    RelatedProduct {
        id: pid(id),
        name: format!("Látex Interior {}", measure.unwrap_or_default()),
        price: dec(price),
        discounted_price: None,
        stock: Some(5),
        measure: measure.map(str::to_owned),
        explicit_measure: None,
        weight: None,
        image_url: None,
    }
}

pub(crate) fn make_group(products: Vec<RelatedProduct>) -> ProductGroup {
    ProductGroup {
        base_name: "Látex Interior".to_owned(),
        products,
    }
}
