use crossterm::style::Color;

/// Design tokens for skeleton-cli output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

/// Prefix of every status line
pub const PREFIX: &str = env!("CARGO_PKG_NAME");
