//! Utilities for interaction of policies and environments.
use crate::{
    record::{RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;

/// Run episodes with a policy and recorder.
///
/// Every step writes its record to `recorder`, extended with the reward,
/// the episode index and the step index within the episode. At the end of
/// each episode the return and the length are given to [`Recorder::store`]
/// and flushed with the episode index.
///
/// Returns the return of every episode.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::new();

    for episode in 0..n_episodes {
        let (mut prev_obs, _) = env.reset(None)?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs);
            let (step, mut record) = env.step(&act)?;
            r_total += step.reward;

            record.insert("reward", RecordValue::Scalar(step.reward));
            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(count_step as _));
            recorder.write(record);
            count_step += 1;

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        log::info!(
            "Episode {:?}, {:?} steps, return = {:?}",
            episode,
            count_step,
            r_total
        );
        let mut record = crate::record::Record::from_scalar("Episode return", r_total);
        record.insert("Episode length", RecordValue::Scalar(count_step as _));
        recorder.store(record);
        recorder.flush(episode as _);
        rs.push(r_total);
    }

    Ok(rs)
}
