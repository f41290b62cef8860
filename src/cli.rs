//! Command line interface.

pub mod build;
pub mod completions;
pub mod run;
pub mod source;
pub mod utils;

#[cfg(feature = "plotting")]
pub mod plot;

#[cfg(feature = "json")]
pub mod sample;
