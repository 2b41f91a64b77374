//! Camera-side helpers: navigation scales and zoom easing.

pub mod scale;
pub mod zoom;

pub use scale::{
    current_scale, optimal_camera_distance, planet_visibility_range, star_brightness, star_size,
    NavigationScale, VisibilityRange, SCALES,
};
pub use zoom::{interpolate_zoom, ZoomEasing, ZoomTransition};
