//! State of one open quick-view modal.
//!
//! A [`QuickView`] is built when the modal opens and dropped when it closes.
//! Variant and sibling data arrive asynchronously through
//! [`QuickView::apply_variants`] and [`QuickView::apply_related`]; every
//! selector change re-resolves the [`ActiveSource`].

use pinteya_core::{Product, ProductGroup, ProductKind, Variant};
use tracing::debug;

use crate::cart::{assemble_line, CartHandler};
use crate::error::CartError;
use crate::matcher::{
    default_variant, find_variant_by_finish, find_variant_by_selection, find_variant_by_width,
};
use crate::options::{
    available_colors, available_finishes, available_widths, capacities_for, finishes_for_color,
};
use crate::related::find_related_by_measure;
use crate::resolve::{resolve_display, ActiveSource, ResolvedDisplay};
use crate::selection::{non_blank, InitPhase, Selection};

#[derive(Debug, Clone)]
pub struct QuickView {
    product: Product,
    kind: ProductKind,
    placeholder: String,
    variants: Vec<Variant>,
    related: ProductGroup,
    selection: Selection,
    source: ActiveSource,
    phase: InitPhase,
}

impl QuickView {
    #[must_use]
    pub fn new(product: Product, placeholder: impl Into<String>) -> Self {
        let kind = ProductKind::detect(&product.name, product.category.as_deref());
        Self {
            product,
            kind,
            placeholder: placeholder.into(),
            variants: Vec::new(),
            related: ProductGroup::default(),
            selection: Selection::default(),
            source: ActiveSource::Base,
            phase: InitPhase::Uninitialized,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn source(&self) -> &ActiveSource {
        &self.source
    }

    #[must_use]
    pub fn phase(&self) -> InitPhase {
        self.phase
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn related(&self) -> &ProductGroup {
        &self.related
    }

    /// Stores the variant list. The first call seeds the selection from the
    /// default variant and the product kind; later calls keep the shopper's
    /// choices.
    pub fn apply_variants(&mut self, variants: Vec<Variant>) {
        self.variants = variants;

        if self.phase == InitPhase::Uninitialized {
            self.phase = InitPhase::Initializing;
            if let Some(v) = default_variant(&self.variants) {
                debug!(product_id = %self.product.id, variant_id = v.id, "preselecting default variant");
                self.selection.capacity = non_blank(v.measure.clone());
                self.selection.color = non_blank(v.color_name.clone());
                self.selection.finish = non_blank(v.finish.clone());
            }
            self.selection = std::mem::take(&mut self.selection).with_kind_defaults(self.kind);
            self.phase = InitPhase::Initialized;
        }

        self.rematch();
    }

    pub fn apply_related(&mut self, group: ProductGroup) {
        self.related = group;
        self.rematch();
    }

    /// Changes the color. After initialization a finish that the new color
    /// is not sold in is replaced by one it is.
    pub fn select_color(&mut self, color: Option<String>) {
        self.selection.color = non_blank(color);
        if self.phase.is_initialized() {
            self.repick_finish_for_color();
        }
        self.rematch();
    }

    pub fn select_capacity(&mut self, capacity: Option<String>) {
        self.selection.capacity = non_blank(capacity);
        self.rematch();
    }

    pub fn select_finish(&mut self, finish: Option<String>) {
        self.selection.finish = non_blank(finish);
        self.rematch();
    }

    pub fn select_width(&mut self, width: Option<String>) {
        self.selection.width = non_blank(width);
        self.rematch();
    }

    pub fn select_size(&mut self, size: Option<String>) {
        self.selection.size = non_blank(size);
        self.rematch();
    }

    pub fn select_grain(&mut self, grain: Option<String>) {
        self.selection.grain = non_blank(grain);
        self.rematch();
    }

    /// Sets the quantity, clamped to at least 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.set_quantity(quantity);
    }

    #[must_use]
    pub fn display(&self) -> ResolvedDisplay {
        resolve_display(
            &self.product,
            self.kind,
            &self.source,
            &self.selection,
            &self.placeholder,
        )
    }

    #[must_use]
    pub fn capacities(&self) -> Vec<String> {
        capacities_for(&self.product, self.kind, &self.variants, &self.related)
    }

    #[must_use]
    pub fn colors(&self) -> Vec<String> {
        available_colors(&self.variants)
    }

    /// Finishes for the selected color, or every finish when the color has
    /// none of its own.
    #[must_use]
    pub fn finishes(&self) -> Vec<String> {
        let for_color = self
            .selection
            .color()
            .map(|c| finishes_for_color(&self.variants, c))
            .unwrap_or_default();
        if for_color.is_empty() {
            available_finishes(&self.variants)
        } else {
            for_color
        }
    }

    #[must_use]
    pub fn widths(&self) -> Vec<String> {
        let from_variants = available_widths(&self.variants);
        if from_variants.is_empty() {
            self.kind
                .width_options()
                .iter()
                .map(|w| (*w).to_owned())
                .collect()
        } else {
            from_variants
        }
    }

    /// Validates the selection and hands the line to `handler`. Nothing is
    /// sent to the handler on rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] from [`assemble_line`].
    pub fn add_to_cart<H: CartHandler + ?Sized>(
        &self,
        handler: &mut H,
        currency_code: &str,
    ) -> Result<(), CartError> {
        let display = self.display();
        let line = assemble_line(
            &self.product,
            &self.source,
            &self.selection,
            &display,
            currency_code,
        )?;
        handler.add_to_cart(&self.product, line);
        Ok(())
    }

    pub fn add_to_wishlist<H: CartHandler + ?Sized>(&self, handler: &mut H) {
        handler.add_to_wishlist(&self.product);
    }

    /// Re-resolves the active source from the current selection.
    fn rematch(&mut self) {
        self.source = self.resolve_source();
        debug!(
            product_id = %self.product.id,
            source = ?self.source.kind(),
            capacity = ?self.selection.capacity,
            "quick view source resolved"
        );
    }

    fn resolve_source(&self) -> ActiveSource {
        let sel = &self.selection;

        if let Some(v) = sel
            .width
            .as_deref()
            .and_then(|w| find_variant_by_width(&self.variants, w))
        {
            return ActiveSource::Variant(v.clone());
        }

        if let Some(capacity) = sel.capacity() {
            if let Some(v) =
                find_variant_by_selection(&self.variants, sel.color(), capacity, sel.finish())
            {
                return ActiveSource::Variant(v.clone());
            }
            if let Some(r) = find_related_by_measure(&self.related.products, capacity) {
                debug!(
                    product_id = %self.product.id,
                    related_id = %r.id,
                    capacity,
                    "no variant for capacity, using sibling product"
                );
                return ActiveSource::Related(r.clone());
            }
        } else if let Some(finish) = sel.finish().filter(|_| self.phase.is_initialized()) {
            if let Some(v) = find_variant_by_finish(&self.variants, finish, None, sel.color()) {
                return ActiveSource::Variant(v.clone());
            }
        }

        ActiveSource::Base
    }

    fn repick_finish_for_color(&mut self) {
        let Some(color) = self.selection.color.as_deref() else {
            return;
        };
        if self.variants.is_empty() {
            return;
        }

        let for_color = finishes_for_color(&self.variants, color);
        let current = self.selection.finish.as_deref();
        let offered = |f: &str| for_color.iter().any(|c| c.eq_ignore_ascii_case(f));

        if !for_color.is_empty() {
            if !current.is_some_and(offered) {
                self.selection.finish = for_color.first().cloned();
            }
        } else if current.is_none() {
            self.selection.finish = available_finishes(&self.variants).into_iter().next();
        }
    }
}

#[cfg(test)]
#[path = "quick_view_test.rs"]
mod tests;
