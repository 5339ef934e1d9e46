//! Variant resolution for the product quick view: measure normalization,
//! variant and sibling-product matching, price/stock/image resolution and
//! cart line assembly.

pub mod cart;
pub mod error;
pub mod image;
pub mod matcher;
pub mod measure;
pub mod options;
pub mod pricing;
pub mod quick_view;
pub mod related;
pub mod resolve;
pub mod selection;

#[cfg(test)]
mod fixtures;

pub use cart::{assemble_line, CartHandler, CartLineItem};
pub use error::CartError;
pub use matcher::{
    default_variant, find_variant_by_capacity, find_variant_by_finish, find_variant_by_selection,
    find_variant_by_width,
};
pub use measure::{measures_match, normalize_measure};
pub use quick_view::QuickView;
pub use related::find_related_by_measure;
pub use resolve::{resolve_display, ActiveSource, PriceBasis, ResolvedDisplay, SourceKind};
pub use selection::{InitPhase, Selection};
