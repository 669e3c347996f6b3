//! Bundler Implementations
//!
//! Concrete implementations of the Bundler port.

mod webpack;

pub use webpack::WebpackBundler;
