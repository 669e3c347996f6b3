//! Generate Event Port
//!
//! Provides an observable interface for the generate pipeline.
//! Enables colored console output, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{EntryMode, Stage};

/// Event emitted during a `generate` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// Pipeline moved to a new stage
    StageEntered { stage: Stage },

    /// A default workspace asset was written because it was missing
    AssetMaterialized { path: PathBuf },

    /// The other mode's entry artifact was deleted
    StaleArtifactRemoved { mode: EntryMode, path: PathBuf },

    /// Template mode: entry script generated
    EntryWritten { path: PathBuf, import: String },

    /// Copy mode: component copied into the workspace
    TemplateCopied { from: PathBuf, to: PathBuf },

    /// Bundler finished; `stats` is its own output
    BuildCompleted { stats: String },

    /// Final HTML written
    TargetWritten { path: PathBuf },

    /// Run finished successfully
    Completed { target: PathBuf },

    /// Run aborted
    Failed { stage: Stage, message: String },
}

/// Trait for receiving generate events
///
/// Implementations can be:
/// - ConsoleEventSink: colored milestones in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}
