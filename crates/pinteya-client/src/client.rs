//! HTTP client for the storefront product API.
//!
//! Every endpoint wraps its payload in an [`ApiEnvelope`]; `"success": false`
//! surfaces as [`ClientError::Api`]. Requests are made once, with no retry.

use std::time::Duration;

use pinteya_core::{Product, ProductGroup, ProductId, Variant};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::normalize::{normalize_group, normalize_product, normalize_variants};
use crate::types::{ApiEnvelope, WireProduct, WireProductGroup, WireVariant};

/// Client for the storefront's `/api/products` routes.
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
}

impl StorefrontClient {
    /// Creates a client rooted at `base_url` (a wiremock URI in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps any path prefix when endpoints are joined.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the product-detail row.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] / [`ClientError::UnexpectedStatus`] on a
    ///   non-2xx status.
    /// - [`ClientError::Api`] if the envelope reports failure or has no data.
    /// - [`ClientError::Deserialize`] / [`ClientError::Normalization`] if the
    ///   payload cannot be read.
    /// - [`ClientError::Http`] on network failure.
    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let url = self.endpoint(&format!("api/products/{id}"))?;
        let wire: WireProduct = self
            .get_envelope(url, &format!("product {id}"))
            .await?
            .ok_or_else(|| ClientError::Api(format!("product {id} response has no data")))?;
        normalize_product(wire)
    }

    /// Fetches the variant rows recorded under `id`. Rows that fail
    /// normalization are skipped.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::fetch_product`], except that a missing
    /// `data` field yields an empty list.
    pub async fn fetch_variants(&self, id: ProductId) -> Result<Vec<Variant>, ClientError> {
        let url = self.endpoint(&format!("api/products/{id}/variants"))?;
        let rows: Vec<WireVariant> = self
            .get_envelope(url, &format!("variants of product {id}"))
            .await?
            .unwrap_or_default();
        Ok(normalize_variants(rows, id))
    }

    /// Fetches the sibling products sharing `id`'s base name.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::fetch_product`], except that a missing
    /// `data` field yields an empty group.
    pub async fn fetch_related(&self, id: ProductId) -> Result<ProductGroup, ClientError> {
        let url = self.endpoint(&format!("api/products/{id}/related"))?;
        let wire: Option<WireProductGroup> = self
            .get_envelope(url, &format!("related products of {id}"))
            .await?;
        Ok(wire.map(normalize_group).unwrap_or_default())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join {path:?}: {e}"),
            })
    }

    /// Sends a GET request, maps non-2xx statuses to typed errors, and
    /// unwraps the `{ success, data, error }` envelope.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<Option<T>, ClientError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        if !envelope.success {
            let msg = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ClientError::Api(msg));
        }

        Ok(envelope.data)
    }
}
