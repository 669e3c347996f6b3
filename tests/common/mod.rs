//! Common test utilities for skeleton-cli integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a CLI runner
//! - Fixtures: Components and stand-in bundler/renderer scripts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
