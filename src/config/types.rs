//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntryMode;

/// How the entry artifact is produced
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntryConfig {
    /// Copy the component instead of generating an entry script
    #[serde(default)]
    pub copy_template: bool,

    /// Custom entry template; must contain `SKELETON_ENTRY_RELATIVE_PATH`
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl EntryConfig {
    pub fn mode(&self) -> EntryMode {
        EntryMode::from_copy_flag(self.copy_template)
    }
}

/// Where generated artifacts live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default = "default_workspace_dir")]
    pub dir: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            dir: default_workspace_dir(),
        }
    }
}

fn default_workspace_dir() -> PathBuf {
    PathBuf::from(".skeleton")
}

/// External bundler invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    #[serde(default = "default_bundler_program")]
    pub program: String,

    #[serde(default = "default_bundler_args")]
    pub args: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            program: default_bundler_program(),
            args: default_bundler_args(),
        }
    }
}

fn default_bundler_program() -> String {
    "npx".to_string()
}

fn default_bundler_args() -> Vec<String> {
    vec!["--no-install".to_string(), "webpack".to_string()]
}

/// External renderer invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default = "default_renderer_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: default_renderer_program(),
            args: Vec::new(),
        }
    }
}

fn default_renderer_program() -> String {
    "node".to_string()
}

/// Host HTML template
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HtmlConfig {
    /// Custom template; must contain `<!--vue-ssr-outlet-->`
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub entry: EntryConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub bundler: BundlerConfig,

    #[serde(default)]
    pub renderer: RendererConfig,

    #[serde(default)]
    pub html: HtmlConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
