//! Loads everything a quick view needs for one product.

use pinteya_core::{AliasTable, Product, ProductGroup, ProductId, Variant};
use tracing::{debug, warn};

use crate::client::StorefrontClient;
use crate::error::ClientError;
use crate::lifecycle::LifecycleToken;

/// Data for one quick-view open. Each part degrades independently: a failed
/// fetch leaves its part empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickViewData {
    pub product: Option<Product>,
    pub variants: Vec<Variant>,
    pub related: ProductGroup,
}

pub struct QuickViewLoader {
    client: StorefrontClient,
    aliases: AliasTable,
}

impl QuickViewLoader {
    #[must_use]
    pub fn new(client: StorefrontClient, aliases: AliasTable) -> Self {
        Self { client, aliases }
    }

    /// Fetches the product, its variants and its sibling group concurrently.
    ///
    /// Variants are fetched for the id the alias table points at. An
    /// invalid `raw_id` logs a warning and yields empty data without any
    /// request being made. Fetch failures are logged and leave their part
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] when `token`'s lifecycle ends before
    /// the fetches complete. No other error is returned.
    pub async fn load(
        &self,
        raw_id: &str,
        token: &LifecycleToken,
    ) -> Result<QuickViewData, ClientError> {
        let id = match ProductId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(raw_id, error = %e, "quick view opened with invalid product id");
                return Ok(QuickViewData::default());
            }
        };

        let variant_source = self.aliases.variant_source(id);
        if variant_source != id {
            debug!(product_id = %id, variants_from = %variant_source, "fetching variants from aliased product");
        }

        let (product, variants, related) = token
            .run(async {
                tokio::join!(
                    self.client.fetch_product(id),
                    self.client.fetch_variants(variant_source),
                    self.client.fetch_related(id),
                )
            })
            .await?;

        let product = product
            .map_err(|e| warn!(product_id = %id, error = %e, "product fetch failed"))
            .ok();
        let variants = variants
            .map_err(|e| {
                warn!(product_id = %id, variants_from = %variant_source, error = %e, "variant fetch failed");
            })
            .unwrap_or_default();
        let related = related
            .map_err(|e| warn!(product_id = %id, error = %e, "related products fetch failed"))
            .unwrap_or_default();

        debug!(
            product_id = %id,
            has_product = product.is_some(),
            variants = variants.len(),
            related = related.products.len(),
            "quick view data loaded"
        );

        Ok(QuickViewData {
            product,
            variants,
            related,
        })
    }
}
