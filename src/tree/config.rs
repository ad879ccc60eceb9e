//! Configuration types for the tree walker

/// Files between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 200;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Raw ignore patterns, as loaded from the ignore file
    pub ignore_patterns: Vec<String>,
    /// Notify the observer each time the file count reaches a multiple of this.
    /// 0 disables progress notifications.
    pub progress_interval: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
