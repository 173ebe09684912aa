//! CLI command implementations.

pub mod params;
pub mod process;
pub mod vowels;
