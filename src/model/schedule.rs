use serde::{Deserialize, Serialize};

use crate::model::game::RawGame;

/// Top level of the `/api/v1/schedule` response: games grouped by calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleResponse {
    pub total_games: u32,
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleDate {
    pub date: String,
    pub games: Vec<RawGame>,
}

impl ScheduleResponse {
    /// Iterate games in upstream order, across all dates.
    pub fn games(&self) -> impl Iterator<Item = &RawGame> {
        self.dates.iter().flat_map(|d| d.games.iter())
    }

    pub fn game_count(&self) -> usize {
        self.dates.iter().map(|d| d.games.len()).sum()
    }
}
