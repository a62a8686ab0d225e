//! Library half of the `tyres` binary: argument parsing, config loading and
//! the resolution driver.

pub mod args;
pub mod config;
pub mod driver;
