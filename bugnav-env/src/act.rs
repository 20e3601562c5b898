//! Action for [`BugNavEnv`](crate::BugNavEnv).
use crate::error::BugNavError;
use bugnav_core::Act;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// The two maneuvers of the bug algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BugNavAct {
    /// Move one step forward along the current heading.
    TowardGoal,

    /// Go around the obstacle that is too close, or leave it behind once it
    /// no longer blocks the way to the goal.
    AroundObstacle,
}

impl BugNavAct {
    /// The number of actions.
    pub const N: usize = 2;

    /// The integer encoding of the action.
    pub fn index(&self) -> i64 {
        match self {
            BugNavAct::TowardGoal => 0,
            BugNavAct::AroundObstacle => 1,
        }
    }
}

impl Act for BugNavAct {}

impl TryFrom<i64> for BugNavAct {
    type Error = BugNavError;

    fn try_from(act: i64) -> Result<Self, Self::Error> {
        match act {
            0 => Ok(BugNavAct::TowardGoal),
            1 => Ok(BugNavAct::AroundObstacle),
            _ => Err(BugNavError::InvalidAction(act)),
        }
    }
}

impl TryFrom<u8> for BugNavAct {
    type Error = BugNavError;

    fn try_from(act: u8) -> Result<Self, Self::Error> {
        Self::try_from(act as i64)
    }
}

impl From<BugNavAct> for i64 {
    fn from(act: BugNavAct) -> Self {
        act.index()
    }
}
