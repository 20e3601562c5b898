//! A 2-D robot navigation environment driven by a bug algorithm.
//!
//! A circular robot has to reach a goal in a walled arena while avoiding
//! circular obstacles placed on its way. The agent chooses between two actions
//! at each step: advance along the heading ([`BugNavAct::TowardGoal`]) or move
//! tangent to the obstacle that is too close ([`BugNavAct::AroundObstacle`]).
//! The observation is the index of that obstacle, or -1 when the way is clear.
//!
//! [`BugNavEnv`] implements [`bugnav_core::Env`]. Episodes are laid out from a
//! seedable random number generator, so that the same seed gives the same goal,
//! robot and obstacles. Reaching the goal is rewarded with 1, a collision with
//! -1 and any other transition with 0.5.
//!
//! Here is an example of running the bug algorithm, rendering into an image.
//!
//! ```no_run
//! use anyhow::Result;
//! use bugnav_core::{DefaultEvaluator, Env as _, Evaluator as _, Policy as _};
//! use bugnav_env::{BugNavEnv, BugNavEnvConfig, BugPolicy, RenderMode};
//!
//! fn main() -> Result<()> {
//! #     env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
//!     let env_config: BugNavEnvConfig = BugNavEnvConfig::default()
//!         .render_mode(RenderMode::RgbArray)
//!         .max_steps(Some(1000));
//!     let mut env = BugNavEnv::build(&env_config, 42)?;
//!     let mut policy = BugPolicy;
//!
//!     let (mut obs, _) = env.reset(None)?;
//!     loop {
//!         let (step, record) = env.step(&policy.sample(&obs))?;
//!         if step.is_done() {
//!             println!("{}", record.get_string("result")?);
//!             break;
//!         }
//!         obs = step.obs;
//!     }
//!     env.save_frame("last_frame.png")?;
//!
//!     // Average return over 5 episodes
//!     let record = DefaultEvaluator::<BugNavEnv>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;
//!     println!("{}", record.get_scalar("Episode return")?);
//!
//!     Ok(())
//! }
//! ```
mod act;
mod env;
pub mod error;
pub mod geometry;
pub mod navigation_goal;
mod obs;
pub mod params;
mod policy;
pub mod render;
mod scenario;
pub mod track;
pub use act::BugNavAct;
pub use env::{BugNavEnv, BugNavEnvConfig, RenderMode};
pub use error::BugNavError;
pub use navigation_goal::{NavigationGoal, NavigationGoalConfig, NavigationInfo, Outcome};
pub use obs::BugNavObs;
pub use params::NavigationParams;
pub use policy::{BugPolicy, RandomPolicy, RandomPolicyConfig};
pub use scenario::Scenario;
