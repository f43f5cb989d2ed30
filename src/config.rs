use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::model::game_type::GameType;

pub const DEFAULT_API_URL: &str = "https://statsapi.mlb.com/api/v1/schedule";
pub const MLB_SPORT_ID: u32 = 1;

/// Everything that pins a run to one postseason: which dates and rounds to ask
/// for, where to ask, and how to label the resulting calendar.
#[derive(Debug, Clone)]
pub struct SeasonConfig {
    pub season: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sport_id: u32,
    pub game_types: Vec<GameType>,
    pub api_url: String,
    pub request_timeout: std::time::Duration,
}

impl SeasonConfig {
    /// Default window for a season: Sept 30 through Nov 2.
    pub fn for_season(season: i32) -> Self {
        SeasonConfig {
            season,
            start_date: NaiveDate::from_ymd_opt(season, 9, 30).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(season, 11, 2).unwrap_or_default(),
            sport_id: MLB_SPORT_ID,
            game_types: vec![
                GameType::WildCard,
                GameType::DivisionSeries,
                GameType::LeagueChampionship,
                GameType::WorldSeries,
            ],
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: std::time::Duration::from_secs(30),
        }
    }

    /// Comma separated upstream codes, e.g. `F,D,L,W`.
    pub fn game_type_filter(&self) -> String {
        self.game_types
            .iter()
            .filter_map(|t| t.code())
            .map(String::from)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn wants(&self, game_type: GameType) -> bool {
        self.game_types.contains(&game_type)
    }

    pub fn calendar_name(&self) -> String {
        format!("MLB {} Postseason", self.season)
    }

    pub fn product_id(&self) -> String {
        format!("-//MLB {} Postseason Auto-Updated//EN", self.season)
    }

    pub fn default_output_path(&self) -> String {
        format!("public/mlb_postseason_{}.ics", self.season)
    }
}

/// Knobs for turning upstream timestamps into event slots.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Civil zone the placeholder kickoff is expressed in.
    pub zone: Tz,
    /// Kickoff assigned to games whose real start is not known yet.
    pub placeholder_kickoff: NaiveTime,
    pub duration: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            zone: chrono_tz::America::New_York,
            placeholder_kickoff: NaiveTime::from_hms_opt(15, 8, 0).unwrap_or_default(),
            duration: Duration::hours(3),
        }
    }
}

/// Rough calendar span of the postseason, independent of year: Sept 28 through Nov 3.
pub fn in_postseason_window(date: NaiveDate) -> bool {
    match date.month() {
        9 => date.day() >= 28,
        10 => true,
        11 => date.day() <= 3,
        _ => false,
    }
}
