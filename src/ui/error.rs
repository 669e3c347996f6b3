use skeleton_cli::SkeletonError;

use crate::ui::text::ColoredText;
use crate::ui::theme::PREFIX;

/// Plain-text diagnostic for `err`
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SkeletonError>() {
        // Validation messages already name the option and the expected shape
        Some(e @ SkeletonError::InvalidPath { .. }) => e.to_string(),
        Some(e) => format!("{PREFIX} err: {e}"),
        None => format!("{PREFIX} err: {err:#}"),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool, color: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format_error(err),
        });
        println!("{}", output);
        return;
    }

    eprintln!("{}", ColoredText::error(format_error(err)).render(color));
}

/// Message for an unknown subcommand; `args` are the raw arguments after the program name
pub fn invalid_command_message(args: &[String]) -> String {
    format!(
        "Invalid command: {}\nSee --help for a list of available commands.",
        args.join(" ")
    )
}

pub fn print_invalid_command(args: &[String], color: bool) {
    eprintln!(
        "{}",
        ColoredText::error(invalid_command_message(args)).render(color)
    );
}
