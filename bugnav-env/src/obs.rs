//! Observation of [`BugNavEnv`](crate::BugNavEnv).
use bugnav_core::Obs;
use serde::{Deserialize, Serialize};

/// The index of the obstacle that is too close to the robot, or -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugNavObs(pub i64);

impl BugNavObs {
    /// The observation when no obstacle is too close.
    pub const CLEAR: BugNavObs = BugNavObs(-1);

    /// The index of the obstacle that is too close, if any.
    pub fn obstacle_index(&self) -> Option<usize> {
        if self.0 < 0 {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Whether no obstacle is too close.
    pub fn is_clear(&self) -> bool {
        self.0 < 0
    }
}

impl Obs for BugNavObs {}

impl From<BugNavObs> for i64 {
    fn from(obs: BugNavObs) -> Self {
        obs.0
    }
}
