//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Validate, prepare entry, build, render, write

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
