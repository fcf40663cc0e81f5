//! The accent picker component and its document surface.
//!
//! This module provides:
//!
//! - [`AccentPicker`]: applies, persists, and broadcasts the selected accent
//!   and keeps every bound container in sync
//! - [`Document`]: the owned surface model: accent marker, containers,
//!   settings panel
//! - [`ContainerId`], [`Container`], [`AccentOption`], [`Panel`],
//!   [`PanelItem`]: the pieces of that surface
//! - [`ApplyOptions`]: knobs for [`AccentPicker::apply_accent_with`]

mod document;
#[allow(clippy::module_inception)]
mod picker;

pub use document::{AccentOption, Container, ContainerId, Document, Panel, PanelItem};
pub use picker::{AccentPicker, ApplyOptions};
