//! Default implementation of the [`Evaluator`] trait.
//!
//! This module provides a simple evaluator that runs a fixed number of episodes
//! and calculates the average return across all episodes.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;

/// A default implementation of the [`Evaluator`] trait.
///
/// This evaluator runs a specified number of episodes and calculates the average
/// return (cumulative reward) and the average length of the episodes.
/// Episode `ix` is started with [`Env::reset_with_index`], so that the evaluation
/// is reproducible for environments that use the index as a seed.
///
/// # Examples
///
/// ```ignore
/// let config = EnvConfig::default();
/// let mut evaluator = DefaultEvaluator::new(&config, 42, 10)?;
///
/// // Evaluate a policy
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    /// Evaluates a policy by running multiple episodes.
    ///
    /// The returned record has the keys `Episode return` and `Episode length`,
    /// both averaged over episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment fails to reset or to step.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        log::debug!("Evaluation");
        let mut r_total = 0f32;
        let mut len_total = 0usize;

        for ix in 0..self.n_episodes {
            log::trace!("Episode: {:?}", ix);
            let mut prev_obs = self.env.reset_with_index(ix)?;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_total += step.reward;
                len_total += 1;
                if step.is_done() {
                    break;
                }
                prev_obs = step.obs;
            }
        }

        let n = self.n_episodes.max(1) as f32;
        log::info!("Average return: {:?}", r_total / n);

        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(len_total as f32 / n)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }

    /// Returns a reference to the environment used for evaluation.
    pub fn env(&self) -> &E {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountdownEnv, CountdownPolicy};

    #[test]
    fn test_average_return_and_length() -> Result<()> {
        // Episode `ix` lasts `ix + 1` steps with a reward of 1 each.
        let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&(), 0, 3)?;
        let record = evaluator.evaluate(&mut CountdownPolicy)?;

        assert_eq!(record.get_scalar("Episode return")?, 2.0);
        assert_eq!(record.get_scalar("Episode length")?, 2.0);
        Ok(())
    }
}
