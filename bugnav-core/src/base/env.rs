//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Represents an environment, typically an MDP.
///
/// The entities of the library interact as illustrated below:
///
/// ```mermaid
/// graph LR
///     Env --> Obs
///     Obs --> Policy
///     Policy --> Act
///     Act --> Env
/// ```
///
/// A caller alternates [`Env::reset`] and a sequence of [`Env::step`] calls until
/// the returned [`Step`] reports that the episode is done.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object and returned by [`Env::reset`].
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performs an environment step.
    ///
    /// Fails if the environment has not been reset or the action cannot be
    /// applied.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Starts a new episode.
    ///
    /// When `seed` is given, the random number generator of the environment is
    /// reinitialized with it before the episode is generated, so that the same
    /// seed always yields the same initial state.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Self::Obs, Self::Info)>;

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used as a random seed,
    /// which is useful when evaluating a policy on a fixed set of episodes.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;

    /// Performs an environment step and resets the environment if the episode ends.
    ///
    /// The observation in the returned [`Step`] is the one after the transition;
    /// the first observation of the next episode is stored in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            let (init_obs, _) = self.reset(None)?;
            step.init_obs = Some(init_obs);
        }
        Ok((step, record))
    }
}
