//! Error types for terminal glue
//!
//! The alert itself has no failure modes: absent optional fields suppress
//! their sections and a blocked confirm press degrades to a no-op. Errors
//! only arise at the terminal boundary used by embedding applications and
//! the demo binary.

use thiserror::Error;

/// Errors from terminal setup and teardown.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("terminal init failed: {source}")]
    TerminalInit {
        #[source]
        source: std::io::Error,
    },

    #[error("terminal restore failed: {source}")]
    TerminalRestore {
        #[source]
        source: std::io::Error,
    },

    #[error("terminal draw failed: {source}")]
    Draw {
        #[source]
        source: std::io::Error,
    },

    #[error("event read failed: {source}")]
    EventRead {
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================
