//! The seam between the environment driver and a task.
use crate::{error::Result, render::Canvas};
use bugnav_core::{record::Record, Act, Info, Obs};
use rand::rngs::StdRng;

/// A task played in the arena.
///
/// [`BugNavEnv`](crate::BugNavEnv) owns the random number generator, the step
/// counter and the rendering; everything specific to a task, from the episode
/// layout to the reward, goes through this trait.
pub trait Scenario {
    /// Configuration of the task.
    type Config: Clone;

    /// Observation of the task.
    type Obs: Obs;

    /// Action of the task.
    type Act: Act;

    /// Information returned by [`Scenario::describe`].
    type Info: Info;

    /// Builds the task with a first episode drawn from `rng`.
    fn build(config: &Self::Config, rng: &mut StdRng) -> Result<Self>
    where
        Self: Sized;

    /// Generates a new episode, discarding the previous one.
    fn init_episode(&mut self, rng: &mut StdRng) -> Result<()>;

    /// Applies an action.
    fn perform_action(&mut self, act: &Self::Act) -> Result<()>;

    /// Computes the observation of the current state.
    fn observe(&mut self) -> Self::Obs;

    /// Reward of the last transition.
    fn reward(&self) -> f32;

    /// Whether the episode reached a terminal state.
    fn is_terminated(&self) -> bool;

    /// Whether the task itself cuts the episode short.
    fn is_truncated(&self) -> bool;

    /// Information about the current state.
    fn describe(&self) -> Self::Info;

    /// Diagnostic values of the current state.
    fn record(&self) -> Record {
        Record::empty()
    }

    /// Draws the current state.
    fn draw(&self, canvas: &mut dyn Canvas);
}
