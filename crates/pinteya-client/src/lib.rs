pub mod client;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod normalize;
pub mod types;

pub use client::StorefrontClient;
pub use error::ClientError;
pub use lifecycle::{LifecycleToken, ModalLifecycle};
pub use loader::{QuickViewData, QuickViewLoader};
pub use normalize::{normalize_group, normalize_product, normalize_variant, normalize_variants};
