//! `quick-view` and `add-to-cart` command handlers.
//!
//! Both load the product through [`QuickViewLoader`], replay the requested
//! selector changes on a [`QuickView`], and print JSON to stdout.

use std::io::ErrorKind;

use anyhow::{bail, Context};
use pinteya_client::{ModalLifecycle, QuickViewData, QuickViewLoader, StorefrontClient};
use pinteya_core::{load_aliases, AliasTable, AppConfig, ConfigError, Product};
use pinteya_variants::{CartHandler, CartLineItem, QuickView};
use serde_json::json;

use crate::SelectionArgs;

/// Prints confirmed lines instead of storing them.
struct StdoutCart;

impl CartHandler for StdoutCart {
    fn add_to_cart(&mut self, _product: &Product, line: CartLineItem) {
        match serde_json::to_string_pretty(&line) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize cart line"),
        }
    }

    fn add_to_wishlist(&mut self, product: &Product) {
        println!("wishlist: {} ({})", product.name, product.id);
    }
}

pub(crate) async fn run_quick_view(config: &AppConfig, args: &SelectionArgs) -> anyhow::Result<()> {
    let view = open_quick_view(config, args).await?;
    let display = view.display();
    let kind = view.kind();

    let output = json!({
        "product": { "id": view.product().id, "name": view.product().name },
        "kind": kind,
        "selection": view.selection(),
        "source": view.source(),
        "display": display,
        "options": {
            "capacities": view.capacities(),
            "colors": view.colors(),
            "finishes": view.finishes(),
            "widths": view.widths(),
            "sizes": kind.size_options(),
            "grains": kind.grain_options(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub(crate) async fn run_add_to_cart(
    config: &AppConfig,
    args: &SelectionArgs,
) -> anyhow::Result<()> {
    let view = open_quick_view(config, args).await?;
    let mut cart = StdoutCart;
    if let Err(e) = view.add_to_cart(&mut cart, &config.currency_code) {
        bail!("{e}");
    }
    Ok(())
}

async fn open_quick_view(config: &AppConfig, args: &SelectionArgs) -> anyhow::Result<QuickView> {
    let client = StorefrontClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let loader = QuickViewLoader::new(client, alias_table(config)?);

    let lifecycle = ModalLifecycle::new();
    let token = lifecycle.open();
    let load = loader.load(&args.id, &token);
    tokio::pin!(load);

    let data = tokio::select! {
        result = &mut load => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            lifecycle.close();
            load.await
        }
    }
    .context("quick view load interrupted")?;

    build_view(data, config, args)
}

/// Replays the requested selector changes in the order a shopper would make
/// them: capacity, color, then finish, so an explicit finish overrides the one
/// picked for the color.
fn build_view(
    data: QuickViewData,
    config: &AppConfig,
    args: &SelectionArgs,
) -> anyhow::Result<QuickView> {
    let Some(product) = data.product else {
        bail!("product {:?} could not be loaded", args.id);
    };

    let mut view = QuickView::new(product, config.placeholder_image.clone());
    view.apply_variants(data.variants);
    view.apply_related(data.related);

    if args.capacity.is_some() {
        view.select_capacity(args.capacity.clone());
    }
    if args.color.is_some() {
        view.select_color(args.color.clone());
    }
    if args.finish.is_some() {
        view.select_finish(args.finish.clone());
    }
    if args.width.is_some() {
        view.select_width(args.width.clone());
    }
    if args.size.is_some() {
        view.select_size(args.size.clone());
    }
    if args.grain.is_some() {
        view.select_grain(args.grain.clone());
    }
    view.set_quantity(args.quantity);

    Ok(view)
}

/// Loads the alias file, falling back to the built-in table when the file is
/// absent. Parse and validation errors are fatal.
fn alias_table(config: &AppConfig) -> anyhow::Result<AliasTable> {
    match load_aliases(&config.aliases_path) {
        Ok(table) => Ok(table),
        Err(ConfigError::AliasFileIo { path, source }) if source.kind() == ErrorKind::NotFound => {
            tracing::warn!(path, "alias file not found, using built-in aliases");
            Ok(AliasTable::builtin())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pinteya_core::{Environment, ProductGroup, ProductId, Variant};
    use pinteya_variants::SourceKind;

    use super::*;

    fn test_config(aliases_path: &str) -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:3000".to_owned(),
            env: Environment::Test,
            log_level: "info".to_owned(),
            aliases_path: PathBuf::from(aliases_path),
            request_timeout_secs: 5,
            user_agent: "pinteya-test/0.1".to_owned(),
            currency_code: "ARS".to_owned(),
            placeholder_image: "/images/products/placeholder.svg".to_owned(),
        }
    }

    fn args(id: &str) -> SelectionArgs {
        SelectionArgs {
            id: id.to_owned(),
            color: None,
            capacity: None,
            finish: None,
            width: None,
            size: None,
            grain: None,
            quantity: 1,
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new(12).unwrap(),
            name: "Látex Interior".to_owned(),
            slug: None,
            brand: None,
            category: None,
            description: None,
            price: "3500".parse().unwrap(),
            discounted_price: None,
            stock: Some(4),
            image: None,
            images: vec![],
            api_image_url: None,
            measure: None,
        }
    }

    fn variant(id: i64, measure: &str, finish: &str) -> Variant {
        Variant {
            id,
            product_id: ProductId::new(12).unwrap(),
            color_name: Some("Blanco".to_owned()),
            color_hex: None,
            measure: Some(measure.to_owned()),
            finish: Some(finish.to_owned()),
            price_list: "3500".parse().unwrap(),
            price_sale: None,
            stock: Some(2),
            is_active: true,
            is_default: false,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn build_view_requires_product() {
        let err = build_view(QuickViewData::default(), &test_config("x"), &args("12")).unwrap_err();
        assert!(err.to_string().contains("could not be loaded"));
    }

    #[test]
    fn build_view_applies_selectors() {
        let data = QuickViewData {
            product: Some(product()),
            variants: vec![variant(1, "4L", "Mate"), variant(2, "20L", "Satinado")],
            related: ProductGroup::default(),
        };
        let mut selection = args("12");
        selection.capacity = Some("20 litros".to_owned());
        selection.quantity = 2;

        let view = build_view(data, &test_config("x"), &selection).unwrap();
        assert_eq!(view.source().kind(), SourceKind::Variant);
        assert_eq!(view.source().variant().map(|v| v.id), Some(2));
        assert_eq!(view.selection().quantity, 2);
    }

    #[test]
    fn missing_alias_file_uses_builtin_table() {
        let table = alias_table(&test_config("/nonexistent/pinteya/aliases.yaml")).unwrap();
        let id = ProductId::new(38).unwrap();
        assert_eq!(table.variant_source(id).get(), 34);
    }
}
