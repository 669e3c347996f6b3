//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundler;
pub mod file_system;
pub mod generate_events;
pub mod renderer;

pub use bundler::{BuildPlan, BuildReport, Bundler};
pub use file_system::{FileSystem, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use renderer::{RenderedApp, Renderer};
