//! Core functionalities.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Environments in this library are not vectorized, so an observation always
/// describes a single environment instance.
pub trait Obs: Clone + Debug {}

/// An action of the environment.
pub trait Act: Clone + Debug {}
