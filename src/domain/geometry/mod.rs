//! Geometry engine
//!
//! Pure functions deriving the ring and inner-shape boundaries from the
//! control bounds, the style and the button state.

pub mod rect;
pub mod shapes;

pub use rect::{Point, Rect};
pub use shapes::{
    circle_resting_rect, outer_ring_rect, pressed_rect, pressed_shape, resting_shape,
    square_resting_rect, InnerShape, RoundedRect,
};
