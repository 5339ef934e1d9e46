//! The shopper's current choices in an open quick view.

use pinteya_core::ProductKind;
use serde::{Deserialize, Serialize};

/// Selector values. Empty selectors are `None`; `quantity` is at least 1
/// once set through [`Selection::set_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub color: Option<String>,
    pub capacity: Option<String>,
    pub finish: Option<String>,
    pub width: Option<String>,
    pub size: Option<String>,
    pub grain: Option<String>,
    pub quantity: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            color: None,
            capacity: None,
            finish: None,
            width: None,
            size: None,
            grain: None,
            quantity: 1,
        }
    }
}

impl Selection {
    /// Fills selectors still empty with the defaults for `kind`: white for
    /// paints and the first option of the width, size and grain lists.
    #[must_use]
    pub fn with_kind_defaults(mut self, kind: ProductKind) -> Self {
        if self.color.is_none() {
            self.color = kind.default_color().map(str::to_owned);
        }
        if self.width.is_none() {
            self.width = kind.width_options().first().map(|w| (*w).to_owned());
        }
        if self.size.is_none() {
            self.size = kind.size_options().first().map(|s| (*s).to_owned());
        }
        if self.grain.is_none() {
            self.grain = kind.grain_options().first().map(|g| (*g).to_owned());
        }
        self
    }

    /// Sets the quantity, clamped to at least 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    #[must_use]
    pub fn capacity(&self) -> Option<&str> {
        self.capacity.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    #[must_use]
    pub fn finish(&self) -> Option<&str> {
        self.finish.as_deref()
    }
}

/// Tracks whether a quick view's defaults have been applied.
///
/// Defaults run exactly once per modal open: the transition out of
/// `Uninitialized` happens on the first variant load and is never undone
/// until a new quick view is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitPhase {
    #[default]
    Uninitialized,
    Initializing,
    Initialized,
}

impl InitPhase {
    #[must_use]
    pub fn is_initialized(self) -> bool {
        self == InitPhase::Initialized
    }
}

/// Treats blank selector input as no selection.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quantity_is_one() {
        assert_eq!(Selection::default().quantity, 1);
    }

    #[test]
    fn paint_defaults_to_white() {
        let s = Selection::default().with_kind_defaults(ProductKind::Paint);
        assert_eq!(s.color(), Some("blanco"));
        assert!(s.width.is_none());
        assert!(s.size.is_none());
    }

    #[test]
    fn tool_defaults_pick_first_option() {
        let brush = Selection::default().with_kind_defaults(ProductKind::Brush);
        assert_eq!(brush.size.as_deref(), Some("1/2\""));
        assert!(brush.color.is_none());

        let tape = Selection::default().with_kind_defaults(ProductKind::Tape);
        assert_eq!(tape.width.as_deref(), Some("12mm"));

        let sandpaper = Selection::default().with_kind_defaults(ProductKind::Sandpaper);
        assert_eq!(sandpaper.grain.as_deref(), Some("40"));
    }

    #[test]
    fn kind_defaults_keep_existing_choices() {
        let s = Selection {
            color: Some("Negro".to_owned()),
            ..Selection::default()
        }
        .with_kind_defaults(ProductKind::Paint);
        assert_eq!(s.color(), Some("Negro"));
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        let mut s = Selection::default();
        s.set_quantity(0);
        assert_eq!(s.quantity, 1);
        s.set_quantity(5);
        assert_eq!(s.quantity, 5);
    }

    #[test]
    fn non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some("  ".to_owned())), None);
        assert_eq!(non_blank(Some(" 4L ".to_owned())).as_deref(), Some("4L"));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn init_phase_starts_uninitialized() {
        assert_eq!(InitPhase::default(), InitPhase::Uninitialized);
        assert!(!InitPhase::Initializing.is_initialized());
        assert!(InitPhase::Initialized.is_initialized());
    }
}
