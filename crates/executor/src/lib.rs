//! Options-record layer for pathexpand.
//!
//! Callers hand in a start node and a JSON options record; this crate
//! normalizes both, validates every value, and runs the matching engine
//! entry point. Commands go through an [`Executor`]; [`PathExpander`] is a
//! typed facade over it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
mod command;
pub mod convert;
mod error;
mod executor;
pub mod handlers;
mod output;

pub use api::PathExpander;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use handlers::ExpandOptions;
pub use output::Output;
