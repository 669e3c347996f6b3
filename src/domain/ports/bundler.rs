//! Bundler port
//!
//! The bundler turns the prepared entry into a server bundle descriptor. It is
//! an external collaborator; the build runs as one blocking call.

use std::path::PathBuf;

use crate::error::SkeletonResult;

/// Everything the bundler needs for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Root of the dependency graph
    pub entry: PathBuf,
    /// Bundler configuration file
    pub config: PathBuf,
    /// Directory receiving build output
    pub output_dir: PathBuf,
    /// File name of the serialized bundle descriptor inside `output_dir`
    pub bundle_name: String,
    /// Directory the bundler runs in (module resolution starts here)
    pub working_dir: PathBuf,
}

impl BuildPlan {
    /// Where the descriptor is expected after a successful build
    pub fn bundle_path(&self) -> PathBuf {
        self.output_dir.join(&self.bundle_name)
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Bundler statistics/log, passed through to the user
    pub stats: String,
}

/// Build a server bundle from a plan.
///
/// Implementations return `SkeletonError::Build` carrying the bundler's own
/// diagnostics on any failure.
pub trait Bundler {
    fn build(&self, plan: &BuildPlan) -> SkeletonResult<BuildReport>;
}
