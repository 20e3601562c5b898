//! Types and traits for recording diagnostic values of environments.
//!
//! Every call of [`Env::step`](crate::Env::step) returns a [`Record`] beside the
//! [`Step`](crate::Step) object. The record carries values that are useful for
//! monitoring but are not part of the MDP, like the textual result of a step or
//! the distance from a goal.
//!
//! # Core Components
//!
//! * [`Record`] - A container for key-value pairs of various data types
//! * [`RecordValue`] - An enum representing different types of values that can be stored
//! * [`Recorder`] - A trait defining the interface for writing and aggregating records
//! * [`BufferedRecorder`] - A recorder that keeps records in memory
//! * [`NullRecorder`] - A recorder that discards all records
//!
//! # Basic Usage
//!
//! ```rust
//! use bugnav_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("result", RecordValue::String("bug-robot proceed".to_string()));
//! assert_eq!(record.get_scalar("step").unwrap(), 1.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
