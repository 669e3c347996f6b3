//! Webpack bundler adapter
//!
//! Runs the configured bundler command with `--config <file>`. The build plan
//! reaches the configuration through `SKELETON_*` environment variables.

use std::ffi::OsString;

use crate::config::BundlerConfig;
use crate::domain::ports::{BuildPlan, BuildReport, Bundler};
use crate::error::{SkeletonError, SkeletonResult};
use crate::infrastructure::process;

/// Bundler backed by an external webpack process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebpackBundler {
    program: String,
    args: Vec<String>,
}

impl WebpackBundler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &BundlerConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    fn command_args(&self, plan: &BuildPlan) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push("--config".into());
        args.push(plan.config.clone().into_os_string());
        args
    }
}

impl Bundler for WebpackBundler {
    fn build(&self, plan: &BuildPlan) -> SkeletonResult<BuildReport> {
        let envs = [
            ("SKELETON_ENTRY", plan.entry.clone().into_os_string()),
            ("SKELETON_OUTPUT_DIR", plan.output_dir.clone().into_os_string()),
            ("SKELETON_BUNDLE_NAME", OsString::from(&plan.bundle_name)),
        ];

        let output = process::run(&self.program, &self.command_args(plan), &plan.working_dir, &envs)
            .map_err(|e| SkeletonError::Build {
                output: format!("failed to launch `{}`: {}", self.program, e),
            })?;

        if !output.success() || has_compile_errors(&output.stdout) {
            return Err(SkeletonError::Build {
                output: output.combined(),
            });
        }

        Ok(BuildReport {
            stats: output.stdout,
        })
    }
}

/// Webpack lists compile errors as `ERROR in <module>` blocks
fn has_compile_errors(stats: &str) -> bool {
    stats
        .lines()
        .any(|line| line.trim_start().starts_with("ERROR in "))
}
