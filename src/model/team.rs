use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameTeams {
    pub away: TeamSide,
    pub home: TeamSide,
}

/// One side of a matchup: the club plus its series record and current score.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamSide {
    pub team: Team,
    pub league_record: LeagueRecord,
    pub score: Option<u32>,
    pub is_winner: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: Option<i64>,
    pub name: String,
    pub abbreviation: String,
    pub short_name: Option<String>,
    pub league: Option<League>,
}

impl Default for Team {
    // Upstream leaves undecided slots without a club; they render as "TBD".
    fn default() -> Self {
        Team {
            id: None,
            name: "TBD".to_string(),
            abbreviation: "TBD".to_string(),
            short_name: None,
            league: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct League {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

/// During the postseason `leagueRecord` carries the series record, not the season one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeagueRecord {
    pub wins: u32,
    pub losses: u32,
}
