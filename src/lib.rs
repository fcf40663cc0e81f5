//! Accent palette picker with persistent selection and synced widgets.
//!
//! `accentuate` owns a fixed registry of accent palettes and the machinery
//! around choosing one:
//!
//! - [`PaletteRegistry`]: seven built-in palettes, read-only, with unknown
//!   ids coercing to [`DEFAULT_ACCENT`]
//! - [`AccentPicker`]: applies a selection to the document marker, persists
//!   it, syncs every bound picker widget, and broadcasts the change
//! - [`AccentStore`]: injected persistence capability, with a JSON file
//!   implementation and an in-memory test double
//! - [`build_option_markup`]: pure markup for one picker option, colors
//!   embedded as inline style variables
//! - [`render_palette_list`]: terminal preview with colored swatches
//!
//! Storage failures never propagate: reads degrade to the default accent,
//! writes are skipped, both are logged. Pickers inserted after startup are
//! bound in batches via [`AccentPicker::pump`].
//!
//! # Example
//!
//! ```rust
//! use accentuate::{AccentPicker, MemoryStore};
//!
//! let mut picker = AccentPicker::new(MemoryStore::with_value("spotify"));
//! let header = picker.document_mut().add_container(None);
//! picker.mount();
//!
//! // The stored selection is applied and pre-checked everywhere.
//! assert_eq!(picker.document().accent_marker(), Some("spotify"));
//! let container = picker.document().container(header).unwrap();
//! assert_eq!(container.checked_option().unwrap().accent, "spotify");
//!
//! // A user selection flows to the marker, the store, and all widgets.
//! picker.radio_changed(header, "tesla");
//! assert_eq!(picker.document().accent_marker(), Some("tesla"));
//! assert_eq!(picker.stored_accent(), "tesla");
//! ```

pub mod color;
pub mod events;
pub mod markup;
pub mod palette;
pub mod picker;
pub mod preview;
pub mod store;

pub use color::{parse_hex, rgb_to_ansi256};
pub use events::AccentEvents;
pub use markup::{build_option_markup, panel_block_markup};
pub use palette::{builtin_registry, Palette, PaletteRegistry, DEFAULT_ACCENT};
pub use picker::{AccentPicker, ApplyOptions, ContainerId, Document, PanelItem};
pub use preview::render_palette_list;
pub use store::{AccentStore, JsonFileStore, MemoryStore, StoreError};
