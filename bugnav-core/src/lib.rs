#![warn(missing_docs)]
//! Core abstractions for running reinforcement learning environments.
//!
//! This crate defines the contract between an environment ([`Env`]) and whoever
//! drives it, typically a [`Policy`] inside an [`Evaluator`] or a training loop
//! owned by an external learning library. Observations ([`Obs`]), actions
//! ([`Act`]) and the additional information of a step ([`Info`]) are associated
//! types of the environment, and every interaction produces a [`Step`] together
//! with a [`Record`](record::Record) of diagnostic values.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

#[cfg(test)]
mod testing;
