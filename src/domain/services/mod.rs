//! Domain Services
//!
//! Pure text transforms applied around the external bundler and renderer.

mod entry_template;
mod outlet;

pub use entry_template::{render_entry, ENTRY_PLACEHOLDER};
pub use outlet::{splice, HEAD_CLOSE, OUTLET};
