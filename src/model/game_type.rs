use serde::{Deserialize, Serialize};

/// Postseason round, decoded from the single-character upstream `gameType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameType {
    #[serde(rename = "F")]
    WildCard,
    #[serde(rename = "D")]
    DivisionSeries,
    #[serde(rename = "L")]
    LeagueChampionship,
    #[serde(rename = "W")]
    WorldSeries,
    #[default]
    #[serde(other)]
    Unknown,
}

impl GameType {
    /// Upstream code used in the `gameType` query filter.
    pub fn code(self) -> Option<char> {
        match self {
            GameType::WildCard => Some('F'),
            GameType::DivisionSeries => Some('D'),
            GameType::LeagueChampionship => Some('L'),
            GameType::WorldSeries => Some('W'),
            GameType::Unknown => None,
        }
    }

    /// Two-letter series code without league prefix.
    pub fn series_code(self) -> Option<&'static str> {
        match self {
            GameType::WildCard => Some("WC"),
            GameType::DivisionSeries => Some("DS"),
            GameType::LeagueChampionship => Some("CS"),
            GameType::WorldSeries => Some("WS"),
            GameType::Unknown => None,
        }
    }

    /// World Series games are interleague; every other round is played within one league.
    pub fn takes_league_prefix(self) -> bool {
        !matches!(self, GameType::WorldSeries | GameType::Unknown)
    }
}
