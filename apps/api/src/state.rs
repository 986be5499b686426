use crate::config::Config;
use crate::models::theme::Theme;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything in here is read-only after startup; requests share no mutable
/// state with each other.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Theme applied when a request carries none. A single immutable value
    /// rather than module-level globals, so the renderer's fallback path is
    /// explicit.
    pub default_theme: Theme,
}
