//! Configuration constants for the quotidian core

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotidian";
}
