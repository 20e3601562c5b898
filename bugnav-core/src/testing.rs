//! A tiny environment used in the tests of this crate.
use crate::{record::Record, Act, Env, Obs, Policy, Step};
use anyhow::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct CountdownObs(pub usize);

impl Obs for CountdownObs {}

#[derive(Clone, Debug)]
pub struct CountdownAct;

impl Act for CountdownAct {}

/// Counts down from `ix + 1` (or 2 after a plain reset) and terminates at zero.
pub struct CountdownEnv {
    remaining: usize,
}

impl Env for CountdownEnv {
    type Config = ();
    type Obs = CountdownObs;
    type Act = CountdownAct;
    type Info = ();

    fn build(_config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self { remaining: 0 })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        self.remaining -= 1;
        let step = Step::new(
            CountdownObs(self.remaining),
            a.clone(),
            1.0,
            self.remaining == 0,
            false,
            (),
            None,
        );
        Ok((step, Record::from_scalar("remaining", self.remaining as f32)))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<(Self::Obs, Self::Info)> {
        self.remaining = 2;
        Ok((CountdownObs(self.remaining), ()))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.remaining = ix + 1;
        Ok(CountdownObs(self.remaining))
    }
}

pub struct CountdownPolicy;

impl Policy<CountdownEnv> for CountdownPolicy {
    fn sample(&mut self, _obs: &CountdownObs) -> CountdownAct {
        CountdownAct
    }
}
