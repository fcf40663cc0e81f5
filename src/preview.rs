//! Terminal preview of the palette list.
//!
//! The swatch rendering the original surface does with CSS variables is done
//! here with ANSI colors: one aligned row per palette, four swatch cells, and
//! a marker on the selected accent. Colors degrade automatically on terminals
//! that do not support them.

use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::color::{hex_to_ansi256, pad_to_width};
use crate::palette::{Palette, PaletteRegistry};

/// Renders every palette in the registry as one aligned row each, marking
/// the selected accent.
///
/// # Example
///
/// ```rust
/// use accentuate::{builtin_registry, render_palette_list};
///
/// let listing = render_palette_list(builtin_registry(), "tesla");
/// assert!(listing.contains("Tesla Ember"));
/// ```
pub fn render_palette_list(registry: &PaletteRegistry, selected: &str) -> String {
    let id_width = registry.iter().map(|p| p.id.width()).max().unwrap_or(0);
    let title_width = registry.iter().map(|p| p.title.width()).max().unwrap_or(0);
    let meta_width = registry
        .iter()
        .map(|p| meta_line(p).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for palette in registry.iter() {
        out.push_str(&render_row(
            palette,
            palette.id == selected,
            id_width,
            title_width,
            meta_width,
        ));
        out.push('\n');
    }
    out
}

fn meta_line(palette: &Palette) -> String {
    format!("{} · {}", palette.brand, palette.description)
}

fn render_row(
    palette: &Palette,
    selected: bool,
    id_width: usize,
    title_width: usize,
    meta_width: usize,
) -> String {
    let marker = if selected { "●" } else { " " };
    let title_style = if selected {
        Style::new().bold()
    } else {
        Style::new()
    };

    let mut row = format!(
        "{} {}  {}  {}  ",
        marker,
        pad_to_width(&palette.id, id_width),
        title_style.apply_to(pad_to_width(&palette.title, title_width)),
        Style::new().dim().apply_to(pad_to_width(&meta_line(palette), meta_width)),
    );
    for hex in &palette.colors {
        match hex_to_ansi256(hex) {
            Some(index) => {
                row.push_str(&Style::new().color256(index).apply_to("██").to_string());
            }
            None => row.push_str("--"),
        }
        row.push(' ');
    }
    row.trim_end().to_string()
}
