//! Node renderer adapter
//!
//! Runs `<program> <args..> <render script> <bundle>`; the script prints one
//! JSON object `{"html": ..., "styles": ...}` as the last line on stdout.
//! Anything printed before it (component logging) is ignored.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::RendererConfig;
use crate::domain::ports::{RenderedApp, Renderer};
use crate::error::{SkeletonError, SkeletonResult};
use crate::infrastructure::process;

/// Renderer backed by a Node.js process running the bundle renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRenderer {
    program: String,
    args: Vec<String>,
    script: PathBuf,
    working_dir: PathBuf,
}

impl NodeRenderer {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        script: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            script: script.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn from_config(config: &RendererConfig, script: &Path, working_dir: &Path) -> Self {
        Self::new(
            config.program.clone(),
            config.args.clone(),
            script,
            working_dir,
        )
    }
}

impl Renderer for NodeRenderer {
    fn render(&self, bundle: &Path) -> SkeletonResult<RenderedApp> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push(self.script.clone().into_os_string());
        args.push(bundle.as_os_str().to_os_string());

        let output = process::run(&self.program, &args, &self.working_dir, &[]).map_err(|e| {
            SkeletonError::Render {
                message: format!("failed to launch `{}`: {}", self.program, e),
            }
        })?;

        if !output.success() {
            return Err(SkeletonError::Render {
                message: output.combined(),
            });
        }

        parse_payload(&output.stdout)
    }
}

fn parse_payload(stdout: &str) -> SkeletonResult<RenderedApp> {
    let payload = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    serde_json::from_str(payload).map_err(|e| SkeletonError::Render {
        message: format!("unexpected renderer output ({e}): {}", stdout.trim()),
    })
}
