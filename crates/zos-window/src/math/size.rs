use serde::{Deserialize, Serialize};

/// 2D integer size
///
/// Components are signed: a resize session stores the delta between the
/// window size and the pointer position, which is routinely negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
