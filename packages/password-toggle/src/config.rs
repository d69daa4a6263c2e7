/// Configuration for wiring a checkbox to a password field.
///
/// # Example
///
/// ```rust
/// # use password_toggle::Config;
/// let cfg = Config::new().with_event("click").with_sync_on_attach(false);
/// assert_eq!(cfg.event(), "click");
/// assert!(!cfg.sync_on_attach());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) event: String,
    pub(crate) sync_on_attach: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event: "change".to_string(),
            sync_on_attach: true,
        }
    }
}

impl Config {
    /// Create a new config listening for `change` events and syncing once on attach.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DOM event on the checkbox that triggers a sync.
    ///
    /// Defaults to `change`. Some older markup uses `click` instead.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Sync the field with the checkbox as soon as the listener is installed.
    ///
    /// Browsers restore form state on reload, so a checkbox can already be checked before any event
    /// fires. Enabled by default.
    pub fn with_sync_on_attach(mut self, sync: bool) -> Self {
        self.sync_on_attach = sync;
        self
    }

    /// The DOM event that triggers a sync.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Whether the field is synced as soon as the listener is installed.
    pub fn sync_on_attach(&self) -> bool {
        self.sync_on_attach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::new();
        assert_eq!(cfg.event(), "change");
        assert!(cfg.sync_on_attach());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn builder_overrides_defaults() {
        let cfg = Config::new().with_event("click").with_sync_on_attach(false);
        assert_eq!(cfg.event(), "click");
        assert!(!cfg.sync_on_attach());
        assert_ne!(cfg, Config::default());
    }
}
