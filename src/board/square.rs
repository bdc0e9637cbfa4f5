//! Square types and square records.

use serde::{Deserialize, Serialize};

/// What a square does. Closed set: effect resolution matches on it
/// exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquareType {
    Start,
    Promotion,
    ProjectSuccess,
    Payday,
    Stop,
    Training,
    Normal,
    Marriage,
    Trouble,
    Goal,
}

impl SquareType {
    /// Upper-case tag, e.g. `PROJECT_SUCCESS`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            SquareType::Start => "START",
            SquareType::Promotion => "PROMOTION",
            SquareType::ProjectSuccess => "PROJECT_SUCCESS",
            SquareType::Payday => "PAYDAY",
            SquareType::Stop => "STOP",
            SquareType::Training => "TRAINING",
            SquareType::Normal => "NORMAL",
            SquareType::Marriage => "MARRIAGE",
            SquareType::Trouble => "TROUBLE",
            SquareType::Goal => "GOAL",
        }
    }
}

impl std::fmt::Display for SquareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One board square.
///
/// `id` equals the square's index and doubles as a scaling factor for
/// PROJECT_SUCCESS and TROUBLE. `row`/`col` are layout only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub id: usize,
    pub square_type: SquareType,
    pub label: String,
    pub description: String,
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Build the square at `index` on a board `row_width` squares wide.
    pub fn new(
        index: usize,
        square_type: SquareType,
        label: impl Into<String>,
        description: impl Into<String>,
        row_width: usize,
    ) -> Self {
        let row_width = row_width.max(1);
        Self {
            id: index,
            square_type,
            label: label.into(),
            description: description.into(),
            row: index / row_width,
            col: index % row_width,
        }
    }

    /// `id` as a signed amount, for money scaling.
    #[must_use]
    pub fn scale(&self) -> i64 {
        i64::try_from(self.id).unwrap_or(i64::MAX)
    }
}
