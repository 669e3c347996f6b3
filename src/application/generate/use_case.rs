//! Generate Use Case
//!
//! Orchestrates one skeleton generation:
//! 1. Validate `--source` and `--target`
//! 2. Prepare the entry artifact (generated entry script or copied component)
//! 3. Build the server bundle
//! 4. Render it and splice the markup into the HTML template
//! 5. Write the target atomically
//!
//! Stages run strictly in sequence and the first failure aborts the run, so
//! either a complete target is written or none is.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::domain::policies::{PathOption, PathPolicy};
use crate::domain::ports::{Bundler, FileSystem, GenerateEvent, GenerateEventSink, Renderer};
use crate::domain::services::{render_entry, splice, ENTRY_PLACEHOLDER, OUTLET};
use crate::domain::value_objects::{EntryMode, ImportPath, Stage};
use crate::error::{SkeletonError, SkeletonResult};
use crate::infrastructure::workspace::Workspace;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<FS, B, R>
where
    FS: FileSystem,
    B: Bundler,
    R: Renderer,
{
    file_system: FS,
    bundler: B,
    renderer: R,
    workspace: Workspace,
}

/// Tracks the current stage and reports transitions
struct Progress<'a> {
    stage: Stage,
    events: &'a dyn GenerateEventSink,
}

impl Progress<'_> {
    fn enter(&mut self, stage: Stage) {
        debug_assert!(
            self.stage.can_move_to(stage),
            "illegal stage transition {} -> {}",
            self.stage,
            stage
        );
        self.stage = stage;
        self.events.on_event(GenerateEvent::StageEntered { stage });
    }

    /// Move to `Failed`, reporting the stage that was running
    fn fail(&mut self, message: String) {
        let stage = self.stage;
        self.enter(Stage::Failed);
        self.emit(GenerateEvent::Failed { stage, message });
    }

    fn emit(&self, event: GenerateEvent) {
        self.events.on_event(event);
    }
}

impl<FS, B, R> GenerateUseCase<FS, B, R>
where
    FS: FileSystem,
    B: Bundler,
    R: Renderer,
{
    pub fn new(file_system: FS, bundler: B, renderer: R, workspace: Workspace) -> Self {
        Self {
            file_system,
            bundler,
            renderer,
            workspace,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Run the whole pipeline, reporting progress to `events`
    pub fn execute(
        &self,
        options: &GenerateOptions,
        events: &dyn GenerateEventSink,
    ) -> SkeletonResult<GenerateResult> {
        let mut progress = Progress {
            stage: Stage::Idle,
            events,
        };

        match self.run(options, &mut progress) {
            Ok(result) => {
                progress.enter(Stage::Done);
                progress.emit(GenerateEvent::Completed {
                    target: result.target.clone(),
                });
                Ok(result)
            }
            Err(err) => {
                progress.fail(err.to_string());
                Err(err)
            }
        }
    }

    fn run(
        &self,
        options: &GenerateOptions,
        progress: &mut Progress<'_>,
    ) -> SkeletonResult<GenerateResult> {
        progress.enter(Stage::Validating);
        let source = PathPolicy::validate(PathOption::Source, options.source.as_deref())?;
        let target = PathPolicy::validate(PathOption::Target, options.target.as_deref())?;
        let source = absolutize(&options.cwd, source);
        let target = absolutize(&options.cwd, target);

        progress.enter(Stage::PreparingEntry);
        for path in self.workspace.materialize(&self.file_system)? {
            progress.emit(GenerateEvent::AssetMaterialized { path });
        }
        self.remove_stale_artifact(options.mode, progress)?;
        let entry_artifact = match options.mode {
            EntryMode::Template => self.write_entry(&source, progress)?,
            EntryMode::Copy => self.copy_component(&source, progress)?,
        };

        progress.enter(Stage::Building);
        let stats = self.build(options.mode)?;
        progress.emit(GenerateEvent::BuildCompleted {
            stats: stats.clone(),
        });

        progress.enter(Stage::Rendering);
        let html = self.render()?;

        progress.enter(Stage::Writing);
        self.file_system
            .write(&target, &html)
            .map_err(|source| SkeletonError::WriteTarget {
                path: target.clone(),
                source,
            })?;
        progress.emit(GenerateEvent::TargetWritten {
            path: target.clone(),
        });

        Ok(GenerateResult {
            target,
            entry_artifact,
            mode: options.mode,
            stats,
        })
    }

    /// Delete the other mode's artifact so only one entry variant exists
    fn remove_stale_artifact(&self, mode: EntryMode, progress: &Progress<'_>) -> SkeletonResult<()> {
        let stale_mode = mode.other();
        let stale = self.workspace.artifact(stale_mode);
        if !self.file_system.exists(&stale) {
            return Ok(());
        }

        self.file_system
            .remove(&stale)
            .map_err(|source| SkeletonError::RemoveArtifact {
                path: stale.clone(),
                source,
            })?;
        progress.emit(GenerateEvent::StaleArtifactRemoved {
            mode: stale_mode,
            path: stale,
        });
        Ok(())
    }

    fn write_entry(&self, source: &Path, progress: &Progress<'_>) -> SkeletonResult<PathBuf> {
        let template_path = self.workspace.entry_template();
        let template = self
            .file_system
            .read(&template_path)
            .map_err(|source| SkeletonError::ReadTemplate {
                path: template_path.clone(),
                source,
            })?;

        let import = ImportPath::between(self.workspace.entry_dir(), source);
        let entry = render_entry(&template, &import).ok_or(SkeletonError::MissingPlaceholder {
            path: template_path,
            token: ENTRY_PLACEHOLDER,
        })?;

        let entry_file = self.workspace.entry_file();
        self.file_system
            .write(&entry_file, &entry)
            .map_err(|source| SkeletonError::WriteEntry {
                path: entry_file.clone(),
                source,
            })?;

        progress.emit(GenerateEvent::EntryWritten {
            path: entry_file.clone(),
            import: import.quoted(),
        });
        Ok(entry_file)
    }

    fn copy_component(&self, source: &Path, progress: &Progress<'_>) -> SkeletonResult<PathBuf> {
        let destination = self.workspace.copied_component();
        if source == destination {
            // The component already lives in the workspace; copying would truncate it.
            progress.emit(GenerateEvent::TemplateCopied {
                from: source.to_path_buf(),
                to: destination.clone(),
            });
            return Ok(destination);
        }

        self.file_system
            .ensure_file(&destination)
            .map_err(|e| SkeletonError::EnsureFile {
                path: destination.clone(),
                source: e,
            })?;
        self.file_system
            .copy(source, &destination)
            .map_err(|e| SkeletonError::CopySource {
                from: source.to_path_buf(),
                to: destination.clone(),
                source: e,
            })?;

        progress.emit(GenerateEvent::TemplateCopied {
            from: source.to_path_buf(),
            to: destination.clone(),
        });
        Ok(destination)
    }

    /// Build the bundle. The previous descriptor is removed first and the
    /// build must leave a fresh one behind.
    fn build(&self, mode: EntryMode) -> SkeletonResult<String> {
        let plan = self.workspace.build_plan(mode);
        let bundle = plan.bundle_path();

        if self.file_system.exists(&bundle) {
            self.file_system
                .remove(&bundle)
                .map_err(|source| SkeletonError::RemoveArtifact {
                    path: bundle.clone(),
                    source,
                })?;
        }

        let report = self.bundler.build(&plan)?;

        if !self.file_system.exists(&bundle) {
            return Err(SkeletonError::BundleMissing { path: bundle });
        }
        Ok(report.stats)
    }

    fn render(&self) -> SkeletonResult<String> {
        let template_path = self.workspace.html_template();
        let template = self
            .file_system
            .read(&template_path)
            .map_err(|source| SkeletonError::ReadTemplate {
                path: template_path.clone(),
                source,
            })?;
        if !template.contains(OUTLET) {
            return Err(SkeletonError::OutletMissing {
                path: template_path,
                outlet: OUTLET,
            });
        }

        let app = self.renderer.render(&self.workspace.bundle_file())?;
        if app.markup.trim().is_empty() {
            return Err(SkeletonError::Render {
                message: "component rendered no markup".to_string(),
            });
        }

        splice(&template, &app).ok_or(SkeletonError::OutletMissing {
            path: template_path,
            outlet: OUTLET,
        })
    }
}

fn absolutize(cwd: &Path, value: &str) -> PathBuf {
    cwd.join(value).clean()
}
