//! Accent change broadcast.

/// Subscriber list notified on every resolved accent change.
///
/// This replaces a runtime-global event bus with an explicit, instance-owned
/// publish/subscribe surface: the picker emits the resolved accent id to all
/// subscribers, synchronously and in subscription order, before its apply
/// operation returns. There is no unsubscribe; listeners live as long as the
/// owning picker.
pub struct AccentEvents {
    listeners: Vec<Box<dyn Fn(&str)>>,
}

impl AccentEvents {
    /// Creates an event list with no subscribers.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for resolved accent changes.
    pub fn subscribe(&mut self, listener: impl Fn(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notifies every listener of a resolved accent id.
    pub fn emit(&self, accent: &str) {
        for listener in &self.listeners {
            listener(accent);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for AccentEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AccentEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccentEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
