use skeleton_cli::config::{ColorMode, Config};
use skeleton_cli::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    /// Color milestones on stdout
    pub color: bool,
    /// Color diagnostics and warnings on stderr
    pub error_color: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        // The flag beats the config file; `auto` defers to it.
        let decide = |stream_color: bool| match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => stream_color && !caps.is_ci,
            },
        };

        Self {
            json,
            color: !json && decide(caps.stdout_color),
            error_color: !json && decide(caps.stderr_color),
        }
    }
}
