//! Configuration constants for cycle-trail
//!
//! This module contains the constants used throughout the application.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, ending with the completion mark
    pub const SPINNER_FRAMES: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Separator between resources in a printed cycle
    pub const TRAIL_SEPARATOR: &str = " -> ";
}

/// Diagnostic logging configuration
pub mod logging {
    /// Environment variable holding a `tracing` filter directive
    pub const FILTER_ENV: &str = "CYCLE_TRAIL_LOG";

    /// Environment variable selecting `compact` or `json` log lines
    pub const FORMAT_ENV: &str = "CYCLE_TRAIL_LOG_FORMAT";

    /// Filter used when `CYCLE_TRAIL_LOG` is unset
    pub const DEFAULT_FILTER: &str = "cycle_trail=warn";
}
