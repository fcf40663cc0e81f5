//! The accent picker component.

use tracing::warn;

use super::document::{AccentOption, ContainerId, Document};
use crate::events::AccentEvents;
use crate::markup::{build_option_markup, panel_block_markup};
use crate::palette::{builtin_registry, PaletteRegistry};
use crate::store::AccentStore;

/// Options for [`AccentPicker::apply_accent_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Skip writing the resolved accent to the store.
    pub skip_persist: bool,
}

/// Owns the palette registry, the document surface, the persistence
/// capability, and the change broadcast.
///
/// Every operation is synchronous. Applying an accent updates the document
/// marker, the store, every bound container's options, and the subscribers,
/// in that order, before the call returns. Store failures are logged and
/// swallowed; unknown accent ids are coerced to the registry default.
///
/// # Example
///
/// ```rust
/// use accentuate::{AccentPicker, MemoryStore};
///
/// let mut picker = AccentPicker::new(MemoryStore::new());
/// let container = picker.document_mut().add_container(None);
/// picker.mount();
///
/// picker.radio_changed(container, "tesla");
/// assert_eq!(picker.document().accent_marker(), Some("tesla"));
/// ```
pub struct AccentPicker {
    registry: PaletteRegistry,
    store: Box<dyn AccentStore>,
    document: Document,
    events: AccentEvents,
    group_seq: u32,
}

impl AccentPicker {
    /// Creates a picker over the built-in seven-palette registry.
    pub fn new(store: impl AccentStore + 'static) -> Self {
        Self::with_registry(store, builtin_registry().clone())
    }

    /// Creates a picker over a custom registry.
    pub fn with_registry(store: impl AccentStore + 'static, registry: PaletteRegistry) -> Self {
        Self {
            registry,
            store: Box::new(store),
            document: Document::new(),
            events: AccentEvents::new(),
            group_seq: 0,
        }
    }

    /// The palette registry.
    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    /// The managed document surface.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the document, for hosts inserting containers or a
    /// settings panel. Structural insertions are picked up by [`pump`].
    ///
    /// [`pump`]: AccentPicker::pump
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Subscribes a listener to resolved accent changes.
    pub fn on_accent_change(&mut self, listener: impl Fn(&str) + 'static) {
        self.events.subscribe(listener);
    }

    /// The persisted accent id, validated against the registry.
    ///
    /// Returns the default accent when the store errors, holds no value, or
    /// holds an id the registry does not know. Store failures are logged,
    /// never propagated.
    pub fn stored_accent(&self) -> String {
        match self.store.get() {
            Ok(Some(id)) => self.registry.resolve(&id).to_string(),
            Ok(None) => self.registry.default_accent().to_string(),
            Err(err) => {
                warn!(error = %err, "accent store read failed, using default");
                self.registry.default_accent().to_string()
            }
        }
    }

    /// Applies an accent id, persisting it. See [`apply_accent_with`].
    ///
    /// [`apply_accent_with`]: AccentPicker::apply_accent_with
    pub fn apply_accent(&mut self, accent: &str) -> String {
        self.apply_accent_with(accent, ApplyOptions::default())
    }

    /// Applies an accent id with explicit options, returning the resolved id.
    ///
    /// Unknown ids are coerced to the default. The document marker, the
    /// store (unless `skip_persist`), every bound container, and the
    /// subscribers are updated in that order before returning. A write
    /// failure is logged and persistence skipped; everything else still
    /// happens.
    pub fn apply_accent_with(&mut self, accent: &str, options: ApplyOptions) -> String {
        let resolved = self.registry.resolve(accent).to_string();
        self.document.set_accent_marker(&resolved);
        if !options.skip_persist {
            if let Err(err) = self.store.set(&resolved) {
                warn!(error = %err, accent = %resolved, "accent store write failed");
            }
        }
        self.sync_inputs(&resolved);
        self.events.emit(&resolved);
        resolved
    }

    /// Populates and wires a container. Idempotent: a bound container is
    /// left untouched.
    ///
    /// The radio group name is the container's explicit name when set,
    /// otherwise `accent-choice-{n}` from the instance's sequence counter.
    /// One option per palette is rendered in registry order. A markup render
    /// failure is logged and that option binds with empty markup.
    pub fn init_picker(&mut self, id: ContainerId) {
        let group = match self.document.container(id) {
            Some(container) if !container.is_bound() => match &container.explicit_group {
                Some(name) => name.clone(),
                None => {
                    self.group_seq += 1;
                    format!("accent-choice-{}", self.group_seq)
                }
            },
            _ => return,
        };

        let mut options = Vec::with_capacity(self.registry.len());
        for palette in self.registry.iter() {
            let markup = match build_option_markup(&group, palette) {
                Ok(markup) => markup,
                Err(err) => {
                    warn!(error = %err, accent = %palette.id, "option markup render failed");
                    String::new()
                }
            };
            options.push(AccentOption {
                accent: palette.id.clone(),
                markup,
                checked: false,
                active: false,
            });
        }

        if let Some(container) = self.document.container_mut(id) {
            container.group_name = Some(group);
            container.options = options;
            container.bound = true;
        }
    }

    /// Change-event entry point for a container's radio group.
    ///
    /// Ignored unless the container is bound and `value` names one of its
    /// options; otherwise applies that accent.
    pub fn radio_changed(&mut self, id: ContainerId, value: &str) {
        let fires = match self.document.container(id) {
            Some(container) if container.is_bound() => container.option(value).is_some(),
            _ => false,
        };
        if fires {
            self.apply_accent(value);
        }
    }

    /// Synthesizes a picker container inside the settings panel when the
    /// panel exists and has none, inserting it before the first divider.
    pub fn ensure_panel_picker(&mut self) {
        match self.document.panel() {
            Some(panel) if !panel.has_picker() => {}
            _ => return,
        }
        let container = self.document.add_container(None);
        if let Some(synthesized) = self.document.container_mut(container) {
            synthesized.shell_markup = Some(panel_block_markup().to_string());
        }
        if let Some(panel) = self.document.panel_mut() {
            panel.insert_picker(container);
        }
    }

    /// Ensures the panel picker exists, binds every unbound container, and
    /// re-syncs all inputs to the stored accent so new pickers reflect the
    /// existing selection.
    pub fn init_all_pickers(&mut self) {
        self.ensure_panel_picker();
        for id in self.document.container_ids() {
            self.init_picker(id);
        }
        let accent = self.stored_accent();
        self.sync_inputs(&accent);
    }

    /// Startup entry point: applies the stored accent to the document
    /// marker, binds all pickers, and syncs their inputs.
    ///
    /// Does not broadcast a change event; only user-driven applies do.
    pub fn mount(&mut self) {
        let accent = self.stored_accent();
        self.document.set_accent_marker(&accent);
        self.init_all_pickers();
        self.sync_inputs(&accent);
    }

    /// Processes pending structural changes in one batch.
    ///
    /// If containers or a panel were inserted since the last scan, runs
    /// [`init_all_pickers`] once; otherwise does nothing. Call this on the
    /// host's schedule; any number of insertions cost one re-scan.
    ///
    /// [`init_all_pickers`]: AccentPicker::init_all_pickers
    pub fn pump(&mut self) {
        if self.document.take_pending_scan() {
            self.init_all_pickers();
        }
    }

    fn sync_inputs(&mut self, accent: &str) {
        for container in self.document.containers_mut() {
            if !container.bound {
                continue;
            }
            for option in &mut container.options {
                let is_active = option.accent == accent;
                option.checked = is_active;
                option.active = is_active;
            }
        }
    }
}

impl std::fmt::Debug for AccentPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccentPicker")
            .field("registry", &self.registry)
            .field("document", &self.document)
            .field("events", &self.events)
            .field("group_seq", &self.group_seq)
            .finish_non_exhaustive()
    }
}
