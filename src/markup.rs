//! Markup builders for picker options and the settings panel block.

use minijinja::Environment;
use serde::Serialize;

use crate::palette::Palette;

/// Template for a single radio+label option.
const OPTION_TEMPLATE: &str = r#"<div class="setting-toggle-option">
  <input type="radio" name="{{ group }}" id="{{ input_id }}" value="{{ id }}" data-accent-control />
  <label class="setting-toggle" for="{{ input_id }}" style="{{ style }}">
    <div class="setting-toggle__meta">
      <span class="setting-toggle__title">{{ title }}</span>
      <span class="setting-toggle__brand">{{ brand }} &middot; {{ description }}</span>
    </div>
    <div class="setting-toggle__swatches">
      <span class="swatch first-color"></span>
      <span class="swatch second-color"></span>
      <span class="swatch third-color"></span>
      <span class="swatch fourth-color"></span>
    </div>
  </label>
</div>
"#;

/// Markup for the block synthesized into a settings panel that has no picker.
const PANEL_BLOCK_MARKUP: &str = r#"<div class="mb-3">
  <small class="d-block text-uppercase font-weight-bold text-muted mb-2">System accent</small>
  <div class="setting-toggle-grid" data-accent-picker></div>
</div>
"#;

#[derive(Serialize)]
struct OptionData<'a> {
    group: &'a str,
    input_id: String,
    id: &'a str,
    title: &'a str,
    brand: &'a str,
    description: &'a str,
    style: String,
}

/// Builds the markup for one radio+label option.
///
/// Pure: no state is touched. The four palette colors are embedded as inline
/// `--setting-*` style variables for swatch rendering, and the input id is
/// `{group}-{palette id}` so options stay unique across pickers.
///
/// # Errors
///
/// Returns an error if template rendering fails.
///
/// # Example
///
/// ```rust
/// use accentuate::{build_option_markup, builtin_registry};
///
/// let tesla = builtin_registry().get("tesla").unwrap();
/// let markup = build_option_markup("accent-choice-1", tesla).unwrap();
/// assert!(markup.contains(r#"value="tesla""#));
/// assert!(markup.contains("--setting-second:#ff6f3c;"));
/// ```
pub fn build_option_markup(group: &str, palette: &Palette) -> Result<String, minijinja::Error> {
    let [first, second, third, fourth] = &palette.colors;
    let style = format!(
        "--setting-first:{};--setting-second:{};--setting-third:{};--setting-fourth:{};",
        first, second, third, fourth
    );
    let data = OptionData {
        group,
        input_id: format!("{}-{}", group, palette.id),
        id: &palette.id,
        title: &palette.title,
        brand: &palette.brand,
        description: &palette.description,
        style,
    };

    let mut env = Environment::new();
    env.add_template("option", OPTION_TEMPLATE)?;
    env.get_template("option")?.render(&data)
}

/// Markup for the "System accent" block injected into the settings panel.
pub fn panel_block_markup() -> &'static str {
    PANEL_BLOCK_MARKUP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::builtin_registry;

    #[test]
    fn test_option_markup_embeds_value_and_group() {
        let nike = builtin_registry().get("nike").unwrap();
        let markup = build_option_markup("my-group", nike).unwrap();

        assert!(markup.contains(r#"name="my-group""#));
        assert!(markup.contains(r#"id="my-group-nike""#));
        assert!(markup.contains(r#"for="my-group-nike""#));
        assert!(markup.contains(r#"value="nike""#));
        assert!(markup.contains("data-accent-control"));
    }

    #[test]
    fn test_option_markup_embeds_all_four_colors() {
        let google = builtin_registry().get("google").unwrap();
        let markup = build_option_markup("g", google).unwrap();

        assert!(markup.contains("--setting-first:#5585b5;"));
        assert!(markup.contains("--setting-second:#53a8b6;"));
        assert!(markup.contains("--setting-third:#79c2d0;"));
        assert!(markup.contains("--setting-fourth:#bbe4e9;"));
    }

    #[test]
    fn test_option_markup_shows_meta() {
        let spotify = builtin_registry().get("spotify").unwrap();
        let markup = build_option_markup("g", spotify).unwrap();

        assert!(markup.contains("Spotify Neon"));
        assert!(markup.contains("Neon studio glow"));
    }

    #[test]
    fn test_option_markup_is_pure() {
        let apple = builtin_registry().get("apple").unwrap();
        let once = build_option_markup("g", apple).unwrap();
        let twice = build_option_markup("g", apple).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_panel_block_markup_has_picker_grid() {
        let markup = panel_block_markup();
        assert!(markup.contains("data-accent-picker"));
        assert!(markup.contains("System accent"));
    }
}
