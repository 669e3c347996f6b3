//! Configuration module for skeleton-cli
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SKELETON_*)
//! 3. Project config (./skeleton.toml)
//! 4. User config (<config dir>/skeleton-cli/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    BundlerConfig, ColorMode, Config, EntryConfig, HtmlConfig, OutputConfig, RendererConfig,
    WorkspaceConfig,
};

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &std::path::Path) -> crate::error::SkeletonResult<Self> {
        let (config, _warnings) = load_with_warnings(path)?;
        Ok(config)
    }
}
