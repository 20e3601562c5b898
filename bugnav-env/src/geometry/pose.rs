use super::Point;

/// Reduces an angle in degrees to `(-180, 180]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let angle = angle % 360.0;
    if angle > 180.0 {
        angle - 360.0
    } else if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Position and heading of the robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Position in the arena.
    pub position: Point,

    /// Heading in degrees, 0 facing `+y`, clockwise positive.
    pub yaw: f64,
}

impl Pose {
    /// Constructs a pose; the heading is normalized.
    pub fn new(position: Point, yaw: f64) -> Self {
        Self {
            position,
            yaw: normalize_angle(yaw),
        }
    }

    /// Turns the robot by `theta` degrees, clockwise for positive values.
    pub fn rotate(&mut self, theta: f64) {
        self.yaw = normalize_angle(self.yaw + theta);
    }

    /// Moves the robot `forward` units along its heading and `lateral` units
    /// to its right. The heading is unchanged; negative values move backward
    /// or to the left.
    pub fn shift(&mut self, forward: f64, lateral: f64) {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        self.position = Point::new(
            self.position.x + forward * sin + lateral * cos,
            self.position.y + forward * cos - lateral * sin,
        );
    }

    /// The rotation that makes the robot face `target`.
    pub fn calculate_angle_difference(&self, target: &Point) -> f64 {
        let bearing = (target.x - self.position.x)
            .atan2(target.y - self.position.y)
            .to_degrees();
        normalize_angle(bearing - self.yaw)
    }

    /// Whether the heading is closer to `reference` than to the opposite
    /// direction. A difference of exactly 90 degrees is not closer.
    pub fn is_closer_yaw(&self, reference: f64) -> bool {
        normalize_angle(self.yaw - reference).abs() < 90.0
    }
}
