//! Domain Policies
//!
//! Business rules that govern which user input is accepted.

mod path_policy;

pub use path_policy::{PathOption, PathPolicy};
