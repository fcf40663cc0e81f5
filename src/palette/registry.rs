//! The read-only accent registry and the built-in palettes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::palette::Palette;

/// The accent id used whenever a stored or requested id is unknown.
pub const DEFAULT_ACCENT: &str = "nike";

/// An ordered, read-only mapping from accent id to [`Palette`].
///
/// Built once from a static list; iteration order is the list order, which
/// is also the order pickers render their options in.
///
/// # Example
///
/// ```rust
/// use accentuate::{builtin_registry, DEFAULT_ACCENT};
///
/// let registry = builtin_registry();
/// assert_eq!(registry.len(), 7);
/// assert!(registry.contains("spotify"));
/// assert_eq!(registry.resolve("not-a-brand"), DEFAULT_ACCENT);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
    index: HashMap<String, usize>,
    default_accent: String,
}

impl PaletteRegistry {
    /// Creates a registry from a palette list and a default accent id.
    ///
    /// The default id must name one of the palettes; it is what unknown
    /// ids resolve to.
    pub fn new(palettes: Vec<Palette>, default_accent: &str) -> Self {
        let index = palettes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect::<HashMap<_, _>>();
        debug_assert!(
            index.contains_key(default_accent),
            "default accent '{}' is not in the palette list",
            default_accent
        );
        Self {
            palettes,
            index,
            default_accent: default_accent.to_string(),
        }
    }

    /// Looks up a palette by id.
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.index.get(id).map(|&i| &self.palettes[i])
    }

    /// Returns true if the id names a known palette.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolves an accent id, coercing unknown ids to the default.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        if self.contains(id) {
            id
        } else {
            &self.default_accent
        }
    }

    /// The id unknown accents fall back to.
    pub fn default_accent(&self) -> &str {
        &self.default_accent
    }

    /// Iterates palettes in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// Number of palettes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Returns true if the registry holds no palettes.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

static BUILTIN: Lazy<PaletteRegistry> = Lazy::new(|| {
    let palettes = vec![
        Palette::new(
            "nike",
            "Nike Pulse",
            "Nike",
            "Steely teal confidence",
            ["#ececec", "#9fd3c7", "#385170", "#142d4c"],
        ),
        Palette::new(
            "apple",
            "Apple Ember",
            "Apple",
            "Minimal crimson energy",
            ["#233142", "#455d7a", "#f95959", "#e3e3e3"],
        ),
        Palette::new(
            "samsung",
            "Samsung Ocean",
            "Samsung",
            "Calm navy gradients",
            ["#e7eaf6", "#a2a8d3", "#38598b", "#113f67"],
        ),
        Palette::new(
            "google",
            "Google Breeze",
            "Google",
            "Playful coastal mix",
            ["#5585b5", "#53a8b6", "#79c2d0", "#bbe4e9"],
        ),
        Palette::new(
            "tesla",
            "Tesla Ember",
            "Tesla",
            "Bold electric warmth",
            ["#155263", "#ff6f3c", "#ff9a3c", "#ffc93c"],
        ),
        Palette::new(
            "amazon",
            "Amazon Grove",
            "Amazon",
            "Vibrant rainforest hues",
            ["#93e4c1", "#3baea0", "#118a7e", "#1f6f78"],
        ),
        Palette::new(
            "spotify",
            "Spotify Neon",
            "Spotify",
            "Neon studio glow",
            ["#27296d", "#5e63b6", "#a393eb", "#f5c7f7"],
        ),
    ];
    PaletteRegistry::new(palettes, DEFAULT_ACCENT)
});

/// Returns the built-in registry of seven accent palettes.
pub fn builtin_registry() -> &'static PaletteRegistry {
    &BUILTIN
}
