//! Generate Module
//!
//! Turns a single-file component into a static skeleton HTML page.
//!
//! ## Structure
//!
//! - `options` - Input of one run (`GenerateOptions`)
//! - `result` - Outcome of a successful run (`GenerateResult`)
//! - `use_case` - The pipeline itself (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton_cli::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(fs, bundler, renderer, workspace);
//! let options = GenerateOptions::new(cwd).with_source("./Skeleton.vue").with_target("./skeleton.html");
//! let result = use_case.execute(&options, &NoopEventSink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
