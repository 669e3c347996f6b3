//! `skeleton-cli generate`

use std::path::Path;

use anyhow::Result;
use skeleton_cli::config::Config;
use skeleton_cli::domain::ports::GenerateEventSink;
use skeleton_cli::infrastructure::JsonEventSink;
use skeleton_cli::presentation::factory;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

pub fn cmd_generate(
    source: Option<String>,
    target: Option<String>,
    cwd: &Path,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let use_case = factory::create_generate_use_case(cwd, config);
    let options = factory::generate_options(cwd, source, target, config);

    let sink: Box<dyn GenerateEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui.color))
    };

    use_case.execute(&options, sink.as_ref())?;
    Ok(())
}
