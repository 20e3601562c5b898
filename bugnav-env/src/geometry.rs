//! Geometry of the arena: points, segments and the robot pose.
//!
//! Coordinates are in arena units with `y` growing upward. Angles are in
//! degrees; a heading of 0 faces `+y` and positive angles turn clockwise,
//! so the bearing of a vector `(dx, dy)` is `atan2(dx, dy)`. Every angle
//! produced by this module is normalized to `(-180, 180]`.
mod line;
mod point;
mod pose;
pub use line::Line;
pub use point::Point;
pub use pose::{normalize_angle, Pose};
