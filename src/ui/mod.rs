//! Terminal presentation for the `skeleton-cli` binary

pub mod console;
pub mod context;
pub mod error;
pub mod output;
pub mod terminal;
pub mod text;
pub mod theme;
