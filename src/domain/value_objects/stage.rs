//! Pipeline stage value object

use serde::Serialize;

/// Stage of a single `generate` run.
///
/// `Idle → Validating → PreparingEntry → Building → Rendering → Writing → Done`;
/// any non-terminal stage may move to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Validating,
    PreparingEntry,
    Building,
    Rendering,
    Writing,
    Done,
    Failed,
}

impl Stage {
    /// The stage that follows on success, `None` for terminal stages
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Idle => Some(Stage::Validating),
            Stage::Validating => Some(Stage::PreparingEntry),
            Stage::PreparingEntry => Some(Stage::Building),
            Stage::Building => Some(Stage::Rendering),
            Stage::Rendering => Some(Stage::Writing),
            Stage::Writing => Some(Stage::Done),
            Stage::Done | Stage::Failed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }

    /// Whether a run in this stage may enter `to`
    pub fn can_move_to(&self, to: Stage) -> bool {
        match to {
            Stage::Failed => !self.is_terminal(),
            _ => self.next() == Some(to),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Validating => "validating",
            Stage::PreparingEntry => "preparing_entry",
            Stage::Building => "building",
            Stage::Rendering => "rendering",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
