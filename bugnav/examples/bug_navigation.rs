use anyhow::Result;
use bugnav_core::{DefaultEvaluator, Env as _, Evaluator as _, Policy as _};
use bugnav_env::{
    BugNavEnv, BugNavEnvConfig, BugPolicy, NavigationGoalConfig, RenderMode,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Render {
    None,
    RgbArray,
    Human,
}

impl From<Render> for RenderMode {
    fn from(render: Render) -> Self {
        match render {
            Render::None => RenderMode::None,
            Render::RgbArray => RenderMode::RgbArray,
            Render::Human => RenderMode::Human,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed of the first episode
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Identifier of the track
    #[arg(short, long, default_value_t = 1)]
    track_id: u32,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: usize,

    /// How to render the arena
    #[arg(short, long, value_enum, default_value_t = Render::None)]
    render: Render,

    /// Directory in which a PNG image is saved at every step
    #[arg(short, long)]
    frames_dir: Option<PathBuf>,

    /// YAML file of the environment configuration, overriding the track id
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of episodes of the final evaluation
    #[arg(short, long, default_value_t = 5)]
    eval_episodes: usize,
}

fn env_config(args: &Args) -> Result<BugNavEnvConfig> {
    let config = match &args.config {
        Some(path) => BugNavEnvConfig::load(path)?,
        None => BugNavEnvConfig::default()
            .scenario(NavigationGoalConfig::default().track_id(args.track_id)),
    };
    Ok(config.render_mode(args.render.into()))
}

fn run(args: &Args) -> Result<f32> {
    let env_config = env_config(args)?;
    let mut env = BugNavEnv::build(&env_config, args.seed as i64)?;
    let mut policy = BugPolicy;

    if let Some(dir) = &args.frames_dir {
        std::fs::create_dir_all(dir)?;
    }

    let (mut obs, _) = env.reset(Some(args.seed))?;
    let mut n_episodes = 0;
    for i in 0..args.steps {
        let act = policy.sample(&obs);
        let (step, record) = env.step(&act)?;
        log::info!(
            "Step {}: {:?}, observation = {}, reward = {}, {}",
            i,
            act,
            i64::from(step.obs),
            step.reward,
            record.get_string("result")?
        );

        if let Some(dir) = &args.frames_dir {
            env.save_frame(dir.join(format!("frame_{:05}.png", i)))?;
        }

        obs = if step.is_done() {
            n_episodes += 1;
            env.reset(None)?.0
        } else {
            step.obs
        };
    }
    log::info!("{} episodes ended in {} steps", n_episodes, args.steps);

    let env_config = env_config.render_mode(RenderMode::None).max_steps(Some(10_000));
    let record = DefaultEvaluator::<BugNavEnv>::new(&env_config, args.seed as i64, args.eval_episodes)?
        .evaluate(&mut policy)?;
    let average_return = record.get_scalar("Episode return")?;
    log::info!(
        "Average return = {}, average length = {}",
        average_return,
        record.get_scalar("Episode length")?
    );

    Ok(average_return)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Args, Render};
    use anyhow::Result;
    use tempdir::TempDir;

    #[test]
    fn test_bug_navigation() -> Result<()> {
        let tmp_dir = TempDir::new("bug_navigation")?;
        let frames_dir = tmp_dir.path().join("frames");
        let config_path = tmp_dir.path().join("env.yaml");
        std::fs::write(&config_path, "scenario:\n  track_id: 1\nmax_steps: 50\n")?;

        let args = Args {
            seed: 0,
            track_id: 1,
            steps: 120,
            render: Render::RgbArray,
            frames_dir: Some(frames_dir.clone()),
            config: Some(config_path),
            eval_episodes: 2,
        };
        let average_return = run(&args)?;

        assert!(frames_dir.join("frame_00000.png").exists());
        assert!(frames_dir.join("frame_00119.png").exists());
        assert!(average_return.is_finite());
        Ok(())
    }
}
