//! Keyword classification of products into the selector layouts the quick
//! view offers (color, size, width, grain).

use serde::{Deserialize, Serialize};

const BRUSH_SIZES: &[&str] = &["1/2\"", "1\"", "1 1/2\"", "2\"", "2 1/2\"", "3\"", "4\""];
const TAPE_WIDTHS: &[&str] = &["12mm", "18mm", "24mm", "36mm", "48mm"];
const SANDPAPER_GRAINS: &[&str] = &["40", "60", "80", "100", "120", "150", "180", "220"];
const PAINT_CAPACITIES: &[&str] = &["1L", "4L", "10L", "20L"];

const BRUSH_KEYWORDS: &[&str] = &["pincel", "pinceleta"];
const TAPE_KEYWORDS: &[&str] = &["cinta", "enmascarar"];
const SANDPAPER_KEYWORDS: &[&str] = &["lija"];
const PAINT_KEYWORDS: &[&str] = &[
    "latex",
    "esmalte",
    "pintura",
    "barniz",
    "sintetico",
    "impermeabilizante",
    "membrana",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Paint,
    Brush,
    Tape,
    Sandpaper,
    Other,
}

impl ProductKind {
    /// Classifies a product from its name and optional category.
    ///
    /// Matching is case-insensitive and ignores Spanish accents. Tools are
    /// checked before paints so that `"Pincel para esmalte"` is a brush.
    #[must_use]
    pub fn detect(name: &str, category: Option<&str>) -> Self {
        let haystack = fold(&format!("{name} {}", category.unwrap_or_default()));
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| haystack.contains(k));

        if has_any(BRUSH_KEYWORDS) {
            ProductKind::Brush
        } else if has_any(TAPE_KEYWORDS) {
            ProductKind::Tape
        } else if has_any(SANDPAPER_KEYWORDS) {
            ProductKind::Sandpaper
        } else if has_any(PAINT_KEYWORDS) {
            ProductKind::Paint
        } else {
            ProductKind::Other
        }
    }

    #[must_use]
    pub fn has_color_selector(self) -> bool {
        self == ProductKind::Paint
    }

    #[must_use]
    pub fn has_size_selector(self) -> bool {
        self == ProductKind::Brush
    }

    #[must_use]
    pub fn has_width_selector(self) -> bool {
        self == ProductKind::Tape
    }

    #[must_use]
    pub fn has_grain_selector(self) -> bool {
        self == ProductKind::Sandpaper
    }

    #[must_use]
    pub fn size_options(self) -> &'static [&'static str] {
        if self.has_size_selector() {
            BRUSH_SIZES
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn width_options(self) -> &'static [&'static str] {
        if self.has_width_selector() {
            TAPE_WIDTHS
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn grain_options(self) -> &'static [&'static str] {
        if self.has_grain_selector() {
            SANDPAPER_GRAINS
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn default_capacities(self) -> &'static [&'static str] {
        if self == ProductKind::Paint {
            PAINT_CAPACITIES
        } else {
            &[]
        }
    }

    /// Color preselected when the modal opens.
    #[must_use]
    pub fn default_color(self) -> Option<&'static str> {
        self.has_color_selector().then_some("blanco")
    }
}

/// Lowercases and strips the accents used in Spanish product names.
fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
