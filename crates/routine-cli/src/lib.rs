//! Library components of the `routine` command.

pub mod config;
pub mod logging;
pub mod render;
