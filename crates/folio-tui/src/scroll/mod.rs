//! Smooth page scrolling
//!
//! - `motion` - easing curves and interpolation
//! - `animation` - scroll position controller

pub mod animation;
pub mod motion;

pub use animation::ScrollAnimator;
pub use motion::{frame_interval, EasingType, EasingTypeExt};
