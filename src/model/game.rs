use serde::{Deserialize, Serialize};

use crate::model::game_type::GameType;
use crate::model::status::{GameStatus, StatusAttributes};
use crate::model::team::GameTeams;

/// One entry of `dates[].games[]` in the schedule response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGame {
    pub game_pk: i64,
    pub game_type: GameType,
    pub game_date: Option<String>,
    pub official_date: Option<String>,
    pub status: StatusAttributes,
    pub teams: GameTeams,
    pub venue: Venue,
    pub series_description: String,
    pub series_game_number: u32,
    pub games_in_series: u32,
    pub linescore: Option<Linescore>,
}

impl Default for RawGame {
    fn default() -> Self {
        RawGame {
            game_pk: 0,
            game_type: GameType::Unknown,
            game_date: None,
            official_date: None,
            status: StatusAttributes::default(),
            teams: GameTeams::default(),
            venue: Venue::default(),
            series_description: String::new(),
            series_game_number: 1,
            games_in_series: 0,
            linescore: None,
        }
    }
}

impl RawGame {
    pub fn status(&self) -> GameStatus {
        GameStatus::from_attributes(&self.status)
    }

    pub fn detailed_state(&self) -> &str {
        self.status.detailed_state.as_deref().unwrap_or("Scheduled")
    }

    /// League of the home club, which is the league of the series outside the World Series.
    pub fn league_abbreviation(&self) -> Option<&str> {
        self.teams
            .home
            .team
            .league
            .as_ref()
            .and_then(|l| l.abbreviation.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub id: Option<i64>,
    pub name: String,
}

impl Default for Venue {
    fn default() -> Self {
        Venue { id: None, name: "TBD".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Linescore {
    pub current_inning: Option<u32>,
    pub inning_state: Option<String>,
}
