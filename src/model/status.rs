use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusAttributes {
    pub status_code: String,
    pub detailed_state: Option<String>,
    #[serde(rename = "startTimeTBD")]
    pub start_time_tbd: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Postponed,
    Other,
}

impl GameStatus {
    /// Classify a game from its status block. The short `statusCode` wins; the
    /// human readable `detailedState` is only consulted when the code is blank.
    pub fn from_attributes(status: &StatusAttributes) -> Self {
        let code = status.status_code.trim();
        if !code.is_empty() {
            return Self::from_code(code);
        }
        status
            .detailed_state
            .as_deref()
            .map(Self::from_detailed_state)
            .unwrap_or(GameStatus::Scheduled)
    }

    fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('F') | Some('O') => GameStatus::Final,
            Some('I') | Some('M') => GameStatus::InProgress,
            Some('D') => GameStatus::Postponed,
            Some('S') | Some('P') => GameStatus::Scheduled,
            _ => GameStatus::Other,
        }
    }

    fn from_detailed_state(state: &str) -> Self {
        match state.trim() {
            "Final" | "Game Over" | "Completed Early" => GameStatus::Final,
            "In Progress" | "Live" | "Manager challenge" => GameStatus::InProgress,
            "Postponed" => GameStatus::Postponed,
            "Scheduled" | "Pre-Game" | "Warmup" => GameStatus::Scheduled,
            _ => GameStatus::Other,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, GameStatus::Final)
    }
}
