//! Terminal output for the zeroops binary

pub mod error;
pub mod output;
