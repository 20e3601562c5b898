//! Policy.
use super::Env;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// A policy on an environment.
///
/// Policy is a mapping from an observation to an action.
/// The mapping can be either of deterministic or stochastic.
pub trait Policy<E: Env> {
    /// Sample an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// A configurable object, having type parameter.
pub trait Configurable<E: Env> {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the object.
    fn build(config: Self::Config) -> Self;

    /// Build the object with the configuration in the yaml file of the given path.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {:?}", path))?;
        let rdr = std::io::BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(Self::build(config))
    }
}

#[cfg(test)]
mod tests {
    use super::{Configurable, Policy};
    use crate::testing::{CountdownAct, CountdownEnv, CountdownObs};
    use anyhow::Result;
    use serde::Deserialize;
    use std::io::Write;
    use tempdir::TempDir;

    #[derive(Clone, Deserialize)]
    struct RepeatPolicyConfig {
        n_repeats: usize,
    }

    struct RepeatPolicy {
        n_repeats: usize,
    }

    impl Policy<CountdownEnv> for RepeatPolicy {
        fn sample(&mut self, _obs: &CountdownObs) -> CountdownAct {
            CountdownAct
        }
    }

    impl Configurable<CountdownEnv> for RepeatPolicy {
        type Config = RepeatPolicyConfig;

        fn build(config: Self::Config) -> Self {
            Self {
                n_repeats: config.n_repeats,
            }
        }
    }

    #[test]
    fn test_build_from_path() -> Result<()> {
        let dir = TempDir::new("policy")?;
        let path = dir.path().join("policy.yaml");
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "n_repeats: 3")?;

        let policy = RepeatPolicy::build_from_path(&path)?;
        assert_eq!(policy.n_repeats, 3);

        assert!(RepeatPolicy::build_from_path(dir.path().join("missing.yaml")).is_err());
        Ok(())
    }
}
