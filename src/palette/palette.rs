//! Palette struct describing one accent choice.

use serde::{Deserialize, Serialize};

/// Metadata and colors for a single accent choice.
///
/// A palette is static and immutable once constructed: a unique id, display
/// metadata, and exactly four `#rrggbb` hex colors used for swatch rendering.
///
/// # Example
///
/// ```rust
/// use accentuate::Palette;
///
/// let palette = Palette::new(
///     "tesla",
///     "Tesla Ember",
///     "Tesla",
///     "Bold electric warmth",
///     ["#155263", "#ff6f3c", "#ff9a3c", "#ffc93c"],
/// );
/// assert_eq!(palette.id, "tesla");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Unique accent id, used as the persisted value and radio value.
    pub id: String,
    /// Display title, e.g. "Nike Pulse".
    pub title: String,
    /// Brand name shown alongside the description.
    pub brand: String,
    /// One-line flavor text.
    pub description: String,
    /// Four hex colors, rendered as swatches in list order.
    pub colors: [String; 4],
}

impl Palette {
    /// Creates a palette from string-ish parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        brand: impl Into<String>,
        description: impl Into<String>,
        colors: [&str; 4],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: brand.into(),
            description: description.into(),
            colors: colors.map(String::from),
        }
    }
}
