//! Palette data and the accent registry.
//!
//! This module provides:
//!
//! - [`Palette`]: metadata and colors for one accent choice
//! - [`PaletteRegistry`]: an ordered, read-only id -> palette mapping
//! - [`builtin_registry`]: the seven built-in accent palettes
//! - [`DEFAULT_ACCENT`]: the id every unknown or missing accent falls back to
//!
//! The registry is built once and never mutated; every accent id the rest of
//! the crate applies or persists resolves to one of its keys.

#[allow(clippy::module_inception)]
mod palette;
mod registry;

pub use palette::Palette;
pub use registry::{builtin_registry, PaletteRegistry, DEFAULT_ACCENT};
