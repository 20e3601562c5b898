//! Reference policies for [`BugNavEnv`].
use crate::{act::BugNavAct, env::BugNavEnv, obs::BugNavObs};
use bugnav_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};

/// The bug algorithm: advance while no obstacle is too close, otherwise go
/// around it.
#[derive(Clone, Debug, Default)]
pub struct BugPolicy;

impl Policy<BugNavEnv> for BugPolicy {
    fn sample(&mut self, obs: &BugNavObs) -> BugNavAct {
        if obs.is_clear() {
            BugNavAct::TowardGoal
        } else {
            BugNavAct::AroundObstacle
        }
    }
}

/// Configuration of [`RandomPolicy`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomPolicyConfig {
    /// Seed of the policy; an unseeded policy draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Chooses one of the actions uniformly at random.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl Policy<BugNavEnv> for RandomPolicy {
    fn sample(&mut self, _: &BugNavObs) -> BugNavAct {
        match self.rng.u8(..BugNavAct::N as u8) {
            0 => BugNavAct::TowardGoal,
            _ => BugNavAct::AroundObstacle,
        }
    }
}

impl Configurable<BugNavEnv> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng }
    }
}
