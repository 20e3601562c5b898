//! Bug-robot navigation for reinforcement learning.
//!
//! This crate collects the crates of the project and the examples:
//!
//! * [bugnav-core](bugnav_core) provides the traits and functions generic to
//!   environments and policies: `Env`, `Policy`, `Record`, recorders and
//!   evaluators.
//! * [bugnav-env](bugnav_env) is the navigation environment, in which a circular
//!   robot reaches a goal by going around circular obstacles with a bug algorithm.
//!
//! The example `bug_navigation` runs the bug algorithm on the environment:
//!
//! ```bash
//! cargo run --example bug_navigation -- --seed 42 --steps 2000 --frames-dir /tmp/frames
//! ```
pub use bugnav_core;
pub use bugnav_env;
