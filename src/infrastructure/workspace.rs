//! Workspace
//!
//! All artifacts of a run live under one explicit directory instead of fixed
//! locations next to the executable. Files the tool needs but the user did not
//! provide are materialized from defaults compiled into the binary.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::config::Config;
use crate::domain::ports::{BuildPlan, FileSystem};
use crate::domain::value_objects::EntryMode;
use crate::error::{SkeletonError, SkeletonResult};

/// File name of the serialized server bundle
pub const BUNDLE_NAME: &str = "skeleton.json";

const ENTRY_TEMPLATE: (&str, &str) = (
    "skeleton.entry.template.js",
    include_str!("../../assets/skeleton.entry.template.js"),
);
const COPY_ENTRY: (&str, &str) = ("copy.entry.js", include_str!("../../assets/copy.entry.js"));
const BUNDLER_CONFIG: (&str, &str) = (
    "webpack.skeleton.conf.js",
    include_str!("../../assets/webpack.skeleton.conf.js"),
);
const RENDER_SCRIPT: (&str, &str) = ("render.js", include_str!("../../assets/render.js"));
const HTML_TEMPLATE: (&str, &str) = ("index.html", include_str!("../../assets/index.html"));

/// Locations of every artifact of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    project_root: PathBuf,
    entry_template: Option<PathBuf>,
    html_template: Option<PathBuf>,
}

impl Workspace {
    /// Workspace rooted at `root` with the built-in templates
    pub fn new(root: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into().clean(),
            project_root: project_root.into().clean(),
            entry_template: None,
            html_template: None,
        }
    }

    /// Workspace described by configuration; relative paths resolve against `project_root`
    pub fn from_config(project_root: &Path, config: &Config) -> Self {
        let resolve = |p: &Path| project_root.join(p).clean();
        Self {
            root: resolve(&config.workspace.dir),
            project_root: project_root.clean(),
            entry_template: config.entry.template.as_deref().map(resolve),
            html_template: config.html.template.as_deref().map(resolve),
        }
    }

    pub fn with_entry_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.entry_template = Some(path.into());
        self
    }

    pub fn with_html_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_template = Some(path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the bundler resolves the entry's imports from
    pub fn entry_dir(&self) -> &Path {
        &self.root
    }

    pub fn entry_template(&self) -> PathBuf {
        self.entry_template
            .clone()
            .unwrap_or_else(|| self.root.join(ENTRY_TEMPLATE.0))
    }

    /// Generated entry script (template mode)
    pub fn entry_file(&self) -> PathBuf {
        self.root.join("skeleton.entry.js")
    }

    /// Static entry script importing the copied component (copy mode)
    pub fn copy_entry_file(&self) -> PathBuf {
        self.root.join(COPY_ENTRY.0)
    }

    /// Copied component (copy mode)
    pub fn copied_component(&self) -> PathBuf {
        self.root.join("skeleton.vue")
    }

    /// The entry artifact a mode produces
    pub fn artifact(&self, mode: EntryMode) -> PathBuf {
        match mode {
            EntryMode::Template => self.entry_file(),
            EntryMode::Copy => self.copied_component(),
        }
    }

    /// The file handed to the bundler as its entry in `mode`
    pub fn bundler_entry(&self, mode: EntryMode) -> PathBuf {
        match mode {
            EntryMode::Template => self.entry_file(),
            EntryMode::Copy => self.copy_entry_file(),
        }
    }

    pub fn bundler_config(&self) -> PathBuf {
        self.root.join(BUNDLER_CONFIG.0)
    }

    pub fn render_script(&self) -> PathBuf {
        self.root.join(RENDER_SCRIPT.0)
    }

    pub fn html_template(&self) -> PathBuf {
        self.html_template
            .clone()
            .unwrap_or_else(|| self.root.join(HTML_TEMPLATE.0))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("dist")
    }

    pub fn bundle_file(&self) -> PathBuf {
        self.output_dir().join(BUNDLE_NAME)
    }

    /// Build plan for `mode`
    pub fn build_plan(&self, mode: EntryMode) -> BuildPlan {
        BuildPlan {
            entry: self.bundler_entry(mode),
            config: self.bundler_config(),
            output_dir: self.output_dir(),
            bundle_name: BUNDLE_NAME.to_string(),
            working_dir: self.project_root.clone(),
        }
    }

    /// Write every missing default asset; returns the files written.
    ///
    /// Existing files are never overwritten, so user edits survive. Custom
    /// template locations are not materialized: they must already exist.
    pub fn materialize<FS: FileSystem + ?Sized>(&self, fs: &FS) -> SkeletonResult<Vec<PathBuf>> {
        let mut defaults = vec![COPY_ENTRY, BUNDLER_CONFIG, RENDER_SCRIPT];
        if self.entry_template.is_none() {
            defaults.push(ENTRY_TEMPLATE);
        }
        if self.html_template.is_none() {
            defaults.push(HTML_TEMPLATE);
        }

        let mut written = Vec::new();
        for (name, content) in defaults {
            let path = self.root.join(name);
            if fs.exists(&path) {
                continue;
            }
            fs.write(&path, content)
                .map_err(|source| SkeletonError::MaterializeAsset {
                    path: path.clone(),
                    source,
                })?;
            written.push(path);
        }
        Ok(written)
    }
}
