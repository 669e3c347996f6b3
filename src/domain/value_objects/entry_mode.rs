//! Entry mode value object

use serde::{Deserialize, Serialize};

/// How the user's component is wired into the bundler entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    /// Generate an entry script importing the component by relative path
    #[default]
    Template,
    /// Copy the component to a fixed file imported by a static entry script
    Copy,
}

impl EntryMode {
    /// Map the `copy_template` configuration switch to a mode
    pub fn from_copy_flag(copy_template: bool) -> Self {
        if copy_template {
            EntryMode::Copy
        } else {
            EntryMode::Template
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Template => "template",
            EntryMode::Copy => "copy",
        }
    }

    /// The other mode, whose artifact is stale when this one runs
    pub fn other(&self) -> Self {
        match self {
            EntryMode::Template => EntryMode::Copy,
            EntryMode::Copy => EntryMode::Template,
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
