use crate::config::Config;
use crate::form::fields::FieldSet;

// ── Application State ──────────────────────────────────────────────

/// State shared across HTTP handlers. Everything here is fixed at startup;
/// the form state itself lives in the browser, never on the server.
pub struct AppState {
    pub config: Config,
    /// Fields the served tool variant serializes into forecast URLs.
    pub fields: FieldSet,
}

impl AppState {
    /// Standard tool: every catalog field goes into the URL.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            fields: FieldSet::full(),
        }
    }
}
