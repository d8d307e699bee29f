//! Common test utilities for zeroops CLI tests.
//!
//! `TestEnv` gives every test its own project directory and state directory
//! (`ZEROOPS_HOME`), and on unix can swap ssh/scp for scripts that only log
//! what they were asked to do.

#![allow(dead_code)]

pub mod env;

pub use env::*;
