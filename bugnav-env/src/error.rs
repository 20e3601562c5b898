//! Errors of the navigation environment.
use thiserror::Error;

/// Errors of the navigation environment.
#[derive(Error, Debug)]
pub enum BugNavError {
    /// The action is not one of the actions of the environment.
    #[error("Invalid action: {0}, expected 0 (toward goal) or 1 (around obstacle)")]
    InvalidAction(i64),

    /// A line was constructed with coincident end points.
    #[error("Degenerate line: start and end are both ({0}, {1})")]
    DegenerateLine(f64, f64),

    /// A rejection sampling loop did not find an acceptable sample.
    #[error("Failed to sample {what} in {attempts} attempts")]
    SamplingExhausted {
        /// What was being sampled.
        what: &'static str,
        /// The number of rejected samples.
        attempts: usize,
    },

    /// No track is registered with the identifier.
    #[error("Unknown track id: {0}")]
    UnknownTrack(u32),

    /// A track without spawn areas cannot host an episode.
    #[error("Track {0} has no spawn area")]
    NoSpawnArea(u32),

    /// The robot was told to go around an obstacle in an arena without any.
    #[error("No obstacle to go around")]
    NoObstacle,

    /// A spawn area has a range whose minimum exceeds its maximum.
    #[error("Track {track} has an invalid spawn area: x = {x:?}, y = {y:?}")]
    InvalidSpawnArea {
        /// Identifier of the track.
        track: u32,
        /// Range of the x coordinate.
        x: (f64, f64),
        /// Range of the y coordinate.
        y: (f64, f64),
    },

    /// The environment was stepped before a reset, or after the episode ended.
    #[error("No running episode, the environment must be reset before stepping")]
    NotReset,

    /// The canvas configuration gives an image with no pixel, or too many.
    #[error("Invalid canvas side: {0} pixels")]
    InvalidCanvas(i64),

    /// Failed to write a rendered frame.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type of the navigation environment.
pub type Result<T> = std::result::Result<T, BugNavError>;
