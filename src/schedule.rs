use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, info_span, instrument, warn};

use crate::config::SeasonConfig;
use crate::error::{FetchError, SkipReason};
use crate::model::game::RawGame;
use crate::model::game_type::GameType;
use crate::model::schedule::{ScheduleDate, ScheduleResponse};
use crate::normalizer::SkippedGame;

/// Response envelope with games left undecoded, so one bad record cannot sink the rest.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct Envelope {
    total_games: u32,
    dates: Vec<EnvelopeDate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct EnvelopeDate {
    date: String,
    games: Vec<Value>,
}

/// Postseason schedule as returned by the MLB Stats API, filtered to the configured rounds.
#[derive(Debug, Default)]
pub struct Schedule {
    pub response: ScheduleResponse,
    /// False when the fetch failed and `response` is the empty stand-in.
    pub available: bool,
    /// Games in the configured rounds whose record could not be decoded.
    pub rejected: Vec<SkippedGame>,
}

impl Schedule {
    /// Fetch the schedule for the configured window. Never fails: any transport or
    /// decode problem is logged and yields an empty schedule.
    #[instrument(level = "info", skip(config), fields(season = config.season))]
    pub fn fetch(config: &SeasonConfig) -> Self {
        match Self::try_fetch(config) {
            Ok(schedule) => {
                info!(games = schedule.game_count(), "Fetched postseason schedule");
                schedule
            }
            Err(e) => {
                error!(error = %e, url = %config.api_url, "Schedule fetch failed; continuing with no games");
                Schedule::default()
            }
        }
    }

    /// Single attempt, no retries.
    pub fn try_fetch(config: &SeasonConfig) -> Result<Self, FetchError> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.request_timeout))
            .http_status_as_error(false)
            .build()
            .into();

        let start_date = config.start_date.format("%Y-%m-%d").to_string();
        let end_date = config.end_date.format("%Y-%m-%d").to_string();
        let response = {
            let _span = info_span!("schedule_fetch", url = %config.api_url, %start_date, %end_date).entered();
            agent
                .get(&config.api_url)
                .query("sportId", config.sport_id.to_string())
                .query("startDate", &start_date)
                .query("endDate", &end_date)
                .query("gameType", config.game_type_filter())
                .query("hydrate", "team(league),linescore")
                .call()?
        };

        // With http_status_as_error off, non-2xx arrives here as a normal response.
        let code = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| FetchError::Body(e.to_string()))?;
        if !(200..300).contains(&code) {
            warn!(status = code, bytes = body.len(), "Schedule endpoint returned non-success status");
            return Err(FetchError::Status(code));
        }

        Self::from_json(&body, config)
    }

    /// Build from a raw response body (no network). Games outside the configured
    /// rounds are dropped; games that fail to decode are logged and set aside in
    /// `rejected`.
    pub fn from_json(body: &str, config: &SeasonConfig) -> Result<Self, FetchError> {
        let envelope = Self::deserialize_envelope(body)?;
        let mut rejected = Vec::new();
        let mut dates = Vec::with_capacity(envelope.dates.len());

        for date in envelope.dates {
            let mut games = Vec::with_capacity(date.games.len());
            for value in date.games {
                match serde_json::from_value::<RawGame>(value.clone()) {
                    Ok(game) if config.wants(game.game_type) => games.push(game),
                    Ok(_) => {}
                    Err(e) => {
                        if !Self::may_be_wanted(&value, config) {
                            continue;
                        }
                        let game_pk = value.get("gamePk").and_then(Value::as_i64).unwrap_or(0);
                        warn!(game_pk, date = %date.date, error = %e, "Skipping malformed game record");
                        rejected.push(SkippedGame { game_pk, reason: SkipReason::Malformed(e.to_string()) });
                    }
                }
            }
            if !games.is_empty() {
                dates.push(ScheduleDate { date: date.date, games });
            }
        }

        Ok(Schedule {
            response: ScheduleResponse { total_games: envelope.total_games, dates },
            available: true,
            rejected,
        })
    }

    /// A broken record still counts when its round is wanted or cannot be read.
    fn may_be_wanted(value: &Value, config: &SeasonConfig) -> bool {
        match value.get("gameType").map(GameType::deserialize) {
            Some(Ok(game_type)) => config.wants(game_type),
            _ => true,
        }
    }

    #[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
    fn deserialize_envelope(body: &str) -> Result<Envelope, serde_json::Error> {
        serde_json::from_str::<Envelope>(body)
    }

    /// Games decoded plus games rejected as malformed.
    pub fn record_count(&self) -> usize {
        self.response.game_count() + self.rejected.len()
    }

    pub fn game_count(&self) -> usize {
        self.response.game_count()
    }
}

