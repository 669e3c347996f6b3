//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton_cli::presentation::factory;
//!
//! let use_case = factory::create_generate_use_case(&cwd, &config);
//! let result = use_case.execute(&options, &NoopEventSink);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_generate_use_case;
