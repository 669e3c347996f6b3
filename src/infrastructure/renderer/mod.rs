//! Renderer Implementations
//!
//! Concrete implementations of the Renderer port.

mod node;

pub use node::NodeRenderer;
