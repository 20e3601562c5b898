//! The outcome of a single interaction.
use super::Env;

/// Information returned with a [`Step`] beside the observation and the reward.
pub trait Info {}

impl Info for () {}

/// What an environment returns for one action: the action itself, the next
/// observation, the reward, whether the episode ended and why.
pub struct Step<E: Env> {
    /// The action that was applied.
    pub act: E::Act,

    /// The observation after the action.
    pub obs: E::Obs,

    /// The reward of the transition.
    pub reward: f32,

    /// The episode reached a terminal state.
    pub is_terminated: bool,

    /// The episode was cut short, e.g. by a step limit.
    pub is_truncated: bool,

    /// Environment specific information.
    pub info: E::Info,

    /// First observation of the next episode, filled in by
    /// [`Env::step_with_reset`] when this step ends an episode.
    pub init_obs: Option<E::Obs>,
}

impl<E: Env> Step<E> {
    /// Bundles the values of a step.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
        info: E::Info,
        init_obs: Option<E::Obs>,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
            init_obs,
        }
    }

    /// Whether the episode ended, by termination or truncation.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
