//! JSON Event Sink
//!
//! Streams generate events as NDJSON for CI and editor integrations.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::domain::ports::{GenerateEvent, GenerateEventSink};

/// Event sink writing one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Sink over an arbitrary writer (tests, log files)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn to_json(event: GenerateEvent) -> Value {
    match event {
        GenerateEvent::StageEntered { stage } => json!({
            "event": "stage",
            "stage": stage,
        }),
        GenerateEvent::AssetMaterialized { path } => json!({
            "event": "asset_materialized",
            "path": path.display().to_string(),
        }),
        GenerateEvent::StaleArtifactRemoved { mode, path } => json!({
            "event": "stale_removed",
            "mode": mode,
            "path": path.display().to_string(),
        }),
        GenerateEvent::EntryWritten { path, import } => json!({
            "event": "entry_written",
            "path": path.display().to_string(),
            "import": import,
        }),
        GenerateEvent::TemplateCopied { from, to } => json!({
            "event": "template_copied",
            "from": from.display().to_string(),
            "to": to.display().to_string(),
        }),
        GenerateEvent::BuildCompleted { stats } => json!({
            "event": "build_completed",
            "stats": stats,
        }),
        GenerateEvent::TargetWritten { path } => json!({
            "event": "target_written",
            "path": path.display().to_string(),
        }),
        GenerateEvent::Completed { target } => json!({
            "event": "complete",
            "status": "success",
            "target": target.display().to_string(),
        }),
        GenerateEvent::Failed { stage, message } => json!({
            "event": "failed",
            "stage": stage,
            "error": message,
        }),
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.write_event(to_json(event));
    }
}
