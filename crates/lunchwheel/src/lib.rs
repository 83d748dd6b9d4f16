#![forbid(unsafe_code)]

//! Terminal host for the lunchwheel picker: CLI commands for tending the
//! item list, and an interactive spin view that drives the runtime's frame
//! loop against the real clock.

pub mod cli;
pub mod commands;
pub mod error;
pub mod spin_view;

pub use cli::run_from_env;
pub use error::{AppError, Result};
