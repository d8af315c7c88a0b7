//! Application configuration options

use crate::app::state::Tab;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Backend API base URL
    pub backend_base_url: String,

    /// Tab shown on startup
    pub initial_tab: Tab,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:5000".to_string(),
            initial_tab: Tab::Repositories,
        }
    }
}
