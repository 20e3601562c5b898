use super::Point;
use crate::error::{BugNavError, Result};
use rand::Rng;

/// A segment in the Cartesian plane.
///
/// The slope and the y intercept follow a simplified line model that is only
/// meaningful for the segments of this crate: a vertical segment has slope 0
/// and an infinite intercept, a horizontal segment has slope 0 and the shared
/// `y` as its intercept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    slope: f64,
    y_intercept: f64,
}

impl Line {
    /// Constructs a segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`BugNavError::DegenerateLine`] if `start == end`.
    pub fn new(start: Point, end: Point) -> Result<Self> {
        if start == end {
            return Err(BugNavError::DegenerateLine(start.x, start.y));
        }

        #[allow(clippy::float_cmp)]
        let (slope, y_intercept) = if start.x == end.x {
            (0.0, f64::INFINITY)
        } else if start.y == end.y {
            (0.0, start.y)
        } else {
            let slope = (start.y - end.y) / (start.x - end.x);
            (slope, start.y - slope * start.x)
        };

        Ok(Self {
            start,
            end,
            slope,
            y_intercept,
        })
    }

    /// The first end point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The second end point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// The slope of the line.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The y intercept of the line, infinite for a vertical segment.
    pub fn y_intercept(&self) -> f64 {
        self.y_intercept
    }

    /// Checks if the point lies in the bounding box of the segment.
    ///
    /// The point is assumed to be on the line already; only the extent of the
    /// segment is checked, with both ends included.
    pub fn contains(&self, point: &Point) -> bool {
        let contains_x = self.start.x.min(self.end.x) <= point.x
            && point.x <= self.start.x.max(self.end.x);
        let contains_y = self.start.y.min(self.end.y) <= point.y
            && point.y <= self.start.y.max(self.end.y);
        contains_x && contains_y
    }

    /// Samples a point on the segment.
    ///
    /// `x` is drawn uniformly between the end points and `y` follows from the
    /// line equation. Samples outside of the segment are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BugNavError::SamplingExhausted`] after `max_attempts` rejected
    /// samples, which is always the case for a vertical segment.
    pub fn get_point<R: Rng + ?Sized>(&self, rng: &mut R, max_attempts: usize) -> Result<Point> {
        let (lo, hi) = (self.start.x.min(self.end.x), self.start.x.max(self.end.x));

        for _ in 0..max_attempts {
            let x = rng.gen_range(lo..=hi);
            let point = Point::new(x, self.slope * x + self.y_intercept);
            if self.contains(&point) {
                return Ok(point);
            }
        }

        Err(BugNavError::SamplingExhausted {
            what: "a point on a segment",
            attempts: max_attempts,
        })
    }
}
