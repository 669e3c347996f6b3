//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entry_mode;
mod import_path;
mod stage;

pub use entry_mode::EntryMode;
pub use import_path::ImportPath;
pub use stage::Stage;
