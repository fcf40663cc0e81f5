//! The owned surface model the picker renders into.
//!
//! Containers, options, and the settings panel stand in for the host's real
//! UI tree. Hosts mutate structure through [`Document`]; insertions that
//! could need binding raise a pending-scan flag the picker drains in batches,
//! the way a mutation observer coalesces callbacks.

/// Opaque handle to a picker container within a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub(crate) usize);

/// One selectable option inside a bound container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentOption {
    /// The accent id this option selects (the radio value).
    pub accent: String,
    /// Rendered option markup.
    pub markup: String,
    /// Whether the radio input is checked.
    pub checked: bool,
    /// Whether the wrapping option carries the active marker.
    pub active: bool,
}

/// A picker container: unbound until the picker populates and wires it.
///
/// Binding is a one-way transition; re-binding is a no-op and leaves the
/// populated options untouched.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub(crate) explicit_group: Option<String>,
    pub(crate) group_name: Option<String>,
    pub(crate) bound: bool,
    pub(crate) options: Vec<AccentOption>,
    pub(crate) shell_markup: Option<String>,
}

impl Container {
    /// Whether this container has been populated and wired.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// The radio group name, assigned at bind time.
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Options in render order (empty until bound).
    pub fn options(&self) -> &[AccentOption] {
        &self.options
    }

    /// Looks up the option for an accent id.
    pub fn option(&self, accent: &str) -> Option<&AccentOption> {
        self.options.iter().find(|o| o.accent == accent)
    }

    /// The currently checked option, if any.
    pub fn checked_option(&self) -> Option<&AccentOption> {
        self.options.iter().find(|o| o.checked)
    }

    /// Wrapper markup for containers the picker synthesized into the
    /// settings panel; `None` for host-provided containers.
    pub fn shell_markup(&self) -> Option<&str> {
        self.shell_markup.as_deref()
    }
}

/// One child of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelItem {
    /// A divider; a synthesized picker is inserted before the first one.
    Divider,
    /// Any other settings block, identified by a label.
    Block(String),
    /// A picker container.
    Picker(ContainerId),
}

/// The settings panel, when the surface has one.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub(crate) items: Vec<PanelItem>,
}

impl Panel {
    /// Creates a panel from its child items.
    pub fn new(items: Vec<PanelItem>) -> Self {
        Self { items }
    }

    /// Child items in document order.
    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    /// Whether the panel already contains a picker container.
    pub fn has_picker(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, PanelItem::Picker(_)))
    }

    /// Inserts a picker item before the first divider, or appends if the
    /// panel has none.
    pub(crate) fn insert_picker(&mut self, id: ContainerId) {
        let at = self
            .items
            .iter()
            .position(|item| matches!(item, PanelItem::Divider))
            .unwrap_or(self.items.len());
        self.items.insert(at, PanelItem::Picker(id));
    }
}

/// The surface the picker manages: a root accent marker, picker containers,
/// and an optional settings panel.
///
/// # Example
///
/// ```rust
/// use accentuate::picker::Document;
///
/// let mut doc = Document::new();
/// let id = doc.add_container(Some("header-accents"));
/// assert!(!doc.container(id).unwrap().is_bound());
/// assert_eq!(doc.accent_marker(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    accent_marker: Option<String>,
    containers: Vec<Container>,
    panel: Option<Panel>,
    pending_scan: bool,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accent id currently applied at document level.
    pub fn accent_marker(&self) -> Option<&str> {
        self.accent_marker.as_deref()
    }

    pub(crate) fn set_accent_marker(&mut self, accent: &str) {
        self.accent_marker = Some(accent.to_string());
    }

    /// Adds an unbound picker container, optionally with an explicit radio
    /// group name, and flags it for the next structural scan.
    pub fn add_container(&mut self, group_name: Option<&str>) -> ContainerId {
        self.containers.push(Container {
            explicit_group: group_name.map(String::from),
            ..Container::default()
        });
        self.pending_scan = true;
        ContainerId(self.containers.len() - 1)
    }

    /// Installs a settings panel and flags it for the next structural scan.
    ///
    /// Replaces any existing panel.
    pub fn set_panel(&mut self, items: Vec<PanelItem>) {
        self.panel = Some(Panel::new(items));
        self.pending_scan = true;
    }

    /// The settings panel, if one is installed.
    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub(crate) fn panel_mut(&mut self) -> Option<&mut Panel> {
        self.panel.as_mut()
    }

    /// Looks up a container by id.
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    pub(crate) fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(id.0)
    }

    /// Ids of all containers, in insertion order.
    pub fn container_ids(&self) -> Vec<ContainerId> {
        (0..self.containers.len()).map(ContainerId).collect()
    }

    /// Iterates containers in insertion order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    pub(crate) fn containers_mut(&mut self) -> impl Iterator<Item = &mut Container> {
        self.containers.iter_mut()
    }

    /// Number of containers.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Drains the pending-scan flag raised by structural insertions.
    ///
    /// Any number of insertions collapse into a single `true`.
    pub fn take_pending_scan(&mut self) -> bool {
        std::mem::take(&mut self.pending_scan)
    }
}
