mod config;
use crate::{
    error::BugNavError,
    navigation_goal::NavigationGoal,
    render::{CanvasConfig, ImageCanvas},
    scenario::Scenario,
};
use anyhow::Result;
use bugnav_core::{
    record::{Record, RecordValue},
    Env, Step,
};
pub use config::{BugNavEnvConfig, RenderMode};
use image::RgbImage;
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;

/// The bug-robot navigation environment.
///
/// The environment drives a [`Scenario`], [`NavigationGoal`] by default. It
/// owns the random number generator from which episodes are laid out, counts
/// the steps of the current episode to apply
/// [`max_steps`](BugNavEnvConfig::max_steps) and renders frames.
///
/// An episode has to be started with [`Env::reset`] before stepping; once it
/// terminates or is truncated, [`Env::step`] fails until the next reset.
pub struct BugNavEnv<S: Scenario = NavigationGoal> {
    // The task
    scenario: S,

    // Source of all randomness of the episodes
    rng: StdRng,

    // Seed given at construction, also the base of `reset_with_index`
    seed: u64,

    // Steps in the current episode
    count_steps: usize,

    // True while the current episode can be stepped
    is_running: bool,

    max_steps: Option<usize>,

    render_mode: RenderMode,

    canvas_config: CanvasConfig,

    // Present unless the render mode is `None`
    canvas: Option<ImageCanvas>,
}

impl<S: Scenario> BugNavEnv<S> {
    /// Constructs the environment around a scenario whose episode is already
    /// laid out, so that it can be stepped without a reset.
    pub fn with_scenario(config: &BugNavEnvConfig<S>, scenario: S, seed: u64) -> Result<Self> {
        let mut env = Self::new(config, scenario, seed)?;
        env.is_running = true;
        env.render()?;
        Ok(env)
    }

    fn new(config: &BugNavEnvConfig<S>, scenario: S, seed: u64) -> Result<Self> {
        let canvas = match config.render_mode {
            RenderMode::None => None,
            _ => Some(ImageCanvas::new(config.canvas.clone())?),
        };

        Ok(Self {
            scenario,
            rng: StdRng::seed_from_u64(seed),
            seed,
            count_steps: 0,
            is_running: false,
            max_steps: config.max_steps,
            render_mode: config.render_mode,
            canvas_config: config.canvas.clone(),
            canvas,
        })
    }

    /// The scenario.
    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    /// The number of steps in the current episode.
    pub fn count_steps(&self) -> usize {
        self.count_steps
    }

    /// The seed given at construction.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The last rendered frame, if the render mode is not [`RenderMode::None`].
    pub fn frame(&self) -> Option<RgbImage> {
        self.canvas.as_ref().map(|canvas| canvas.to_image())
    }

    /// Saves the current state as an image; the format follows the extension.
    ///
    /// With [`RenderMode::None`] the state is drawn on a temporary canvas.
    pub fn save_frame(&self, path: impl AsRef<Path>) -> Result<()> {
        match self.canvas.as_ref() {
            Some(canvas) => canvas.save(path)?,
            None => {
                let mut canvas = ImageCanvas::new(self.canvas_config.clone())?;
                self.scenario.draw(&mut canvas);
                canvas.save(path)?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if let Some(canvas) = self.canvas.as_mut() {
            self.scenario.draw(canvas);
            if self.render_mode == RenderMode::Human {
                Self::show(canvas)?;
            }
        }
        Ok(())
    }

    #[cfg(feature = "viuer")]
    fn show(canvas: &ImageCanvas) -> Result<()> {
        let img = image::DynamicImage::ImageRgb8(canvas.to_image());
        let config = viuer::Config {
            width: Some(64),
            ..Default::default()
        };
        viuer::print(&img, &config)
            .map_err(|e| anyhow::anyhow!("Failed to print the frame: {}", e))?;
        Ok(())
    }

    #[cfg(not(feature = "viuer"))]
    fn show(_canvas: &ImageCanvas) -> Result<()> {
        log::trace!("Terminal display is not available without the viuer feature");
        Ok(())
    }
}

impl<S: Scenario> Env for BugNavEnv<S> {
    type Config = BugNavEnvConfig<S>;
    type Obs = S::Obs;
    type Act = S::Act;
    type Info = S::Info;

    /// Builds the environment; `seed` initializes the random number generator.
    ///
    /// The scenario lays out an episode while being built, but
    /// [`Env::reset`] still has to be called before stepping.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        let seed = seed as u64;
        let mut rng = StdRng::seed_from_u64(seed);
        let scenario = S::build(&config.scenario, &mut rng)?;
        let mut env = Self::new(config, scenario, seed)?;
        env.rng = rng;
        Ok(env)
    }

    /// Lays out a new episode.
    ///
    /// If `seed` is given, the random number generator is seeded with it
    /// beforehand, so that the same seed gives the same episode.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Self::Obs, Self::Info)> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.scenario.init_episode(&mut self.rng)?;
        self.count_steps = 0;
        self.is_running = true;
        log::debug!("Reset (seed = {:?})", seed);

        let obs = self.scenario.observe();
        let info = self.scenario.describe();
        self.render()?;
        Ok((obs, info))
    }

    /// Resets with the seed given at construction plus `ix`.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        let seed = self.seed.wrapping_add(ix as u64);
        let (obs, _) = self.reset(Some(seed))?;
        Ok(obs)
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        if !self.is_running {
            return Err(BugNavError::NotReset.into());
        }

        self.scenario.perform_action(act)?;
        self.count_steps += 1;
        let obs = self.scenario.observe();
        let reward = self.scenario.reward();
        let is_terminated = self.scenario.is_terminated();
        let is_truncated = self.scenario.is_truncated()
            || self.max_steps.map_or(false, |max| self.count_steps >= max);
        let info = self.scenario.describe();

        let mut record = self.scenario.record();
        if is_terminated || is_truncated {
            self.is_running = false;
            record.insert(
                "episode_length",
                RecordValue::Scalar(self.count_steps as f32),
            );
            log::debug!(
                "Episode ended after {} steps (terminated = {}, truncated = {})",
                self.count_steps,
                is_terminated,
                is_truncated
            );
        }
        self.render()?;

        let step = Step::new(
            obs,
            act.clone(),
            reward,
            is_terminated,
            is_truncated,
            info,
            None,
        );

        Ok((step, record))
    }
}
