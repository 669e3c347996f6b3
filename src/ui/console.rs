//! Console Event Sink
//!
//! Prints generate milestones as colored status lines.

use std::io::{self, Write};
use std::sync::Mutex;

use skeleton_cli::domain::ports::{GenerateEvent, GenerateEventSink};

use crate::ui::text::ColoredText;
use crate::ui::theme::PREFIX;

pub struct ConsoleEventSink {
    color: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(io::stdout(), color)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            color,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn info(&self, message: &str) {
        self.line(&ColoredText::success(format!("{PREFIX} info: {message}")).render(self.color));
    }

    fn dim(&self, message: String) {
        self.line(&ColoredText::dim(message).render(self.color));
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::AssetMaterialized { path } => {
                self.dim(format!("created {}", path.display()));
            }
            GenerateEvent::StaleArtifactRemoved { mode, path } => {
                self.dim(format!("removed stale {} artifact {}", mode, path.display()));
            }
            GenerateEvent::EntryWritten { .. } => self.info("write skeleton entry successfully!"),
            GenerateEvent::TemplateCopied { .. } => {
                self.info("copy skeleton template successfully!")
            }
            GenerateEvent::BuildCompleted { stats } => {
                let stats = stats.trim_end();
                if !stats.is_empty() {
                    self.line(stats);
                }
            }
            GenerateEvent::Completed { target } => {
                self.info("generate skeleton successfully!\n");
                self.line(
                    &ColoredText::success(format!("click {} to preview\n", target.display()))
                        .render(self.color),
                );
            }
            // Failures are reported once, by the error printer
            GenerateEvent::StageEntered { .. }
            | GenerateEvent::TargetWritten { .. }
            | GenerateEvent::Failed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn success_run_prints_milestones() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), false);

        sink.on_event(GenerateEvent::EntryWritten {
            path: PathBuf::from("/w/skeleton.entry.js"),
            import: "'../Skeleton.vue'".to_string(),
        });
        sink.on_event(GenerateEvent::BuildCompleted {
            stats: "skeleton.js  3 KiB  [emitted]\n".to_string(),
        });
        sink.on_event(GenerateEvent::Completed {
            target: PathBuf::from("/p/skeleton.html"),
        });

        assert_eq!(
            buffer.text(),
            "skeleton-cli info: write skeleton entry successfully!\n\
             skeleton.js  3 KiB  [emitted]\n\
             skeleton-cli info: generate skeleton successfully!\n\n\
             click /p/skeleton.html to preview\n\n"
        );
    }

    #[test]
    fn copy_mode_message() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), false);

        sink.on_event(GenerateEvent::TemplateCopied {
            from: PathBuf::from("/p/a.vue"),
            to: PathBuf::from("/w/skeleton.vue"),
        });

        assert_eq!(
            buffer.text(),
            "skeleton-cli info: copy skeleton template successfully!\n"
        );
    }

    #[test]
    fn failures_are_left_to_the_error_printer() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), true);

        sink.on_event(GenerateEvent::Failed {
            stage: skeleton_cli::domain::value_objects::Stage::Building,
            message: "build failed".to_string(),
        });

        assert!(buffer.text().is_empty());
    }
}
