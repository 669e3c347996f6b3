use std::path::Path;

use skeleton_cli::config::ConfigWarning;

use crate::ui::text::ColoredText;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], color: bool) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        eprintln!(
            "{}",
            ColoredText::warning(format!("⚠ Unknown config key '{}' in {}", w.key, location))
                .render(color)
        );

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
