//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{GenerateOptions, GenerateUseCase};
use crate::config::Config;
use crate::infrastructure::{LocalFs, NodeRenderer, WebpackBundler, Workspace};

/// The generate use case backed by webpack and node
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs, WebpackBundler, NodeRenderer>;

/// Create a generate use case for a project rooted at `project_root`
///
/// The workspace, external commands and templates all come from `config`.
pub fn create_generate_use_case(project_root: &Path, config: &Config) -> ConcreteGenerateUseCase {
    let workspace = Workspace::from_config(project_root, config);
    let bundler = WebpackBundler::from_config(&config.bundler);
    let renderer =
        NodeRenderer::from_config(&config.renderer, &workspace.render_script(), project_root);

    GenerateUseCase::new(LocalFs::new(), bundler, renderer, workspace)
}

/// Options for one `generate` invocation, with the entry mode taken from `config`
pub fn generate_options(
    cwd: &Path,
    source: Option<String>,
    target: Option<String>,
    config: &Config,
) -> GenerateOptions {
    let mut options = GenerateOptions::new(cwd).with_mode(config.entry.mode());
    options.source = source;
    options.target = target;
    options
}
