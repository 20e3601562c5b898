//! Configuration of [`BugNavEnv`](super::BugNavEnv).
use crate::{navigation_goal::NavigationGoal, render::CanvasConfig, scenario::Scenario};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// How [`BugNavEnv`](super::BugNavEnv) renders the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// No rendering.
    None,

    /// Draws a frame after every reset and step, available through
    /// [`BugNavEnv::frame`](super::BugNavEnv::frame).
    RgbArray,

    /// Like [`RenderMode::RgbArray`], and prints the frame on the terminal.
    Human,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::None
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(bound(
    serialize = "S::Config: Serialize",
    deserialize = "S::Config: Deserialize<'de>"
))]
/// Configurations of [`BugNavEnv`](super::BugNavEnv).
pub struct BugNavEnvConfig<S: Scenario = NavigationGoal> {
    pub(super) scenario: S::Config,
    #[serde(default)]
    pub(super) render_mode: RenderMode,
    #[serde(default)]
    pub(super) max_steps: Option<usize>,
    #[serde(default)]
    pub(super) canvas: CanvasConfig,
}

impl<S: Scenario> Clone for BugNavEnvConfig<S> {
    fn clone(&self) -> Self {
        Self {
            scenario: self.scenario.clone(),
            render_mode: self.render_mode,
            max_steps: self.max_steps,
            canvas: self.canvas.clone(),
        }
    }
}

impl<S> Default for BugNavEnvConfig<S>
where
    S: Scenario,
    S::Config: Default,
{
    fn default() -> Self {
        Self {
            scenario: Default::default(),
            render_mode: RenderMode::None,
            max_steps: None,
            canvas: CanvasConfig::default(),
        }
    }
}

impl<S: Scenario> BugNavEnvConfig<S> {
    /// Sets the configuration of the scenario.
    pub fn scenario(mut self, scenario: S::Config) -> Self {
        self.scenario = scenario;
        self
    }

    /// Sets the render mode.
    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Sets the maximum number of steps in an episode. Episodes reaching it are
    /// truncated.
    pub fn max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets how frames are rasterized.
    pub fn canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }

    /// Returns the configuration of the scenario.
    pub fn get_scenario(&self) -> &S::Config {
        &self.scenario
    }

    /// Returns the render mode.
    pub fn get_render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Returns the maximum number of steps in an episode.
    pub fn get_max_steps(&self) -> Option<usize> {
        self.max_steps
    }
}

impl<S> BugNavEnvConfig<S>
where
    S: Scenario,
    S::Config: Serialize + for<'de> Deserialize<'de>,
{
    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration as a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(serde_yaml::to_string(self)?.as_bytes())?;
        Ok(())
    }
}
