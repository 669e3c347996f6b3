//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `workspace` - Artifact locations and embedded default assets
//! - `process` - Child process runner shared by the external tools
//! - `bundler/` - Webpack bundler adapter
//! - `renderer/` - Node server-renderer adapter
//! - `events/` - Event sinks (JSON)

pub mod bundler;
pub mod events;
pub mod fs;
pub mod process;
pub mod renderer;
pub mod workspace;

// Re-export for convenience
pub use bundler::WebpackBundler;
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use renderer::NodeRenderer;
pub use workspace::Workspace;
