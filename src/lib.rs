//! skeleton-cli - skeleton HTML generator
//!
//! Turns a single-file UI component into a static HTML page by writing a
//! bundler entry for it, building a server bundle, rendering that bundle once
//! and splicing the markup into an HTML template.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::value_objects::{EntryMode, Stage};
pub use error::{SkeletonError, SkeletonResult};
