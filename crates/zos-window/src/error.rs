//! Error types for the window core
//!
//! The core has almost no failure surface: geometry is never validated and
//! disabled-state violations are silent no-ops. What remains is attaching to
//! a container that cannot route pointer events or while the window is in
//! use, and parsing configuration.

use crate::space::SpaceId;

/// Errors that can occur in window operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The container has no pointer event scope to bind drag/resize continuation to
    MissingEventScope {
        /// The container the window was being attached to
        space: SpaceId,
    },

    /// The window was borrowed elsewhere when it was being attached
    WindowBusy {
        /// The container the window was being attached to
        space: SpaceId,
    },

    /// A configuration document could not be parsed
    InvalidConfig(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEventScope { space } => {
                write!(f, "space {} is not a valid view: no pointer event scope", space)
            }
            Self::WindowBusy { space } => {
                write!(f, "window is in use, cannot attach to space {}", space)
            }
            Self::InvalidConfig(msg) => write!(f, "invalid window config: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

impl From<serde_json::Error> for WindowError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

/// Result type alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
