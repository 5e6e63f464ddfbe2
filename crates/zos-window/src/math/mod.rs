//! Core geometry types for the window model
//!
//! Window geometry is integral (pixels), so these types carry `i32`
//! components. Transforms are pure translations: no rotation or scale.

mod point;
mod size;

pub use point::Point;
pub use size::Size;
