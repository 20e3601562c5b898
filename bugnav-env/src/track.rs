//! Static layouts of the arenas.
//!
//! A track is identified by an integer and consists of the walls enclosing the
//! arena and the rectangles from which the goal and the robot are spawned.
//! The registered tracks are built once, on first use.
use crate::{
    error::{BugNavError, Result},
    geometry::{Line, Point},
};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A rectangle from which positions are drawn uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    /// Range of the x coordinate, `(min, max)`.
    pub x: (f64, f64),

    /// Range of the y coordinate, `(min, max)`.
    pub y: (f64, f64),
}

impl SpawnArea {
    /// Constructs a spawn area from `(min, max)` ranges.
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Draws a point uniformly from the rectangle.
    ///
    /// The ranges must be ordered, see [`SpawnArea::is_valid`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = rng.gen_range(self.x.0..=self.x.1);
        let y = rng.gen_range(self.y.0..=self.y.1);
        Point::new(x, y)
    }

    /// Whether both ranges are finite and ordered, which
    /// [`SpawnArea::sample`] requires.
    pub fn is_valid(&self) -> bool {
        let ordered = |(min, max): (f64, f64)| min.is_finite() && max.is_finite() && min <= max;
        ordered(self.x) && ordered(self.y)
    }

    /// Whether the point lies in the rectangle.
    pub fn contains(&self, point: &Point) -> bool {
        self.x.0 <= point.x && point.x <= self.x.1 && self.y.0 <= point.y && point.y <= self.y.1
    }
}

/// Walls and spawn areas of an arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    id: u32,
    walls: Vec<Line>,
    spawn_areas: Vec<SpawnArea>,
}

impl Track {
    /// Constructs a track from the corners of its boundary polygon.
    ///
    /// Consecutive corners are joined by walls and the last corner is joined to
    /// the first one.
    ///
    /// # Errors
    ///
    /// Fails if two consecutive corners coincide, if there is no spawn area or
    /// if a spawn area has a range with its bounds swapped or not finite.
    pub fn from_corners(id: u32, corners: &[Point], spawn_areas: Vec<SpawnArea>) -> Result<Self> {
        if spawn_areas.is_empty() {
            return Err(BugNavError::NoSpawnArea(id));
        }
        if let Some(area) = spawn_areas.iter().find(|area| !area.is_valid()) {
            return Err(BugNavError::InvalidSpawnArea {
                track: id,
                x: area.x,
                y: area.y,
            });
        }

        let walls = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .map(|(start, end)| Line::new(*start, *end))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            walls,
            spawn_areas,
        })
    }

    /// Returns the registered track with the given identifier.
    pub fn get(id: u32) -> Result<&'static Track> {
        registry()
            .iter()
            .find(|track| track.id == id)
            .ok_or(BugNavError::UnknownTrack(id))
    }

    /// Identifier of the track.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The walls, in order along the boundary.
    pub fn walls(&self) -> &[Line] {
        &self.walls
    }

    /// The spawn areas.
    pub fn spawn_areas(&self) -> &[SpawnArea] {
        &self.spawn_areas
    }

    /// Draws a point from a randomly chosen spawn area.
    pub fn sample_spawn_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        // The constructor guarantees at least one area.
        match self.spawn_areas.choose(rng) {
            Some(area) => area.sample(rng),
            None => unreachable!("track {} has no spawn area", self.id),
        }
    }
}

fn registry() -> &'static [Track] {
    static TRACKS: OnceLock<Vec<Track>> = OnceLock::new();
    TRACKS.get_or_init(|| {
        let square = Track::from_corners(
            1,
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 20.0),
                Point::new(20.0, 20.0),
                Point::new(20.0, 0.0),
            ],
            vec![SpawnArea::new((1.0, 19.0), (1.0, 19.0))],
        )
        .expect("the square track is well formed");

        vec![square]
    })
}
