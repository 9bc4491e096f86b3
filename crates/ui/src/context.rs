use std::sync::Arc;

use whys_core::Clock;

/// Presentation settings resolved by the binary from flags and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiSettings {
    pub title: String,
    pub always_on_top: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Five Whys".to_string(),
            always_on_top: false,
        }
    }
}

pub trait UiApp: Send + Sync {
    fn settings(&self) -> UiSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    settings: UiSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.settings.title
    }

    /// Clock used to stamp new sessions.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
