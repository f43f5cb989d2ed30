use tracing::{info, warn};

use crate::error::SkipReason;
use crate::model::event::NormalizedEvent;
use crate::model::game::RawGame;
use crate::model::status::GameStatus;
use crate::summary::{build_description, build_summary};
use crate::time_resolver::TimeResolver;

/// A game that was left out of the calendar, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGame {
    pub game_pk: i64,
    pub reason: SkipReason,
}

/// Outcome of normalizing one schedule: renderable events plus everything that was dropped.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub events: Vec<NormalizedEvent>,
    pub skipped: Vec<SkippedGame>,
    pub completed: usize,
    pub scheduled: usize,
    pub live: usize,
}

impl Batch {
    pub fn rendered(&self) -> usize {
        self.events.len()
    }
}

pub struct Normalizer {
    resolver: TimeResolver,
}

impl Normalizer {
    pub fn new(resolver: TimeResolver) -> Self {
        Self { resolver }
    }

    /// Map one upstream game to its calendar view.
    pub fn normalize(&self, game: &RawGame) -> Result<NormalizedEvent, SkipReason> {
        let away = &game.teams.away.team.name;
        let home = &game.teams.home.team.name;
        let raw = game
            .game_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(game.official_date.as_deref());
        let slot = self.resolver.resolve(raw, away, home, game.status.start_time_tbd)?;

        Ok(NormalizedEvent {
            id: game.game_pk,
            start_utc: slot.start,
            end_utc: slot.end,
            summary: build_summary(game),
            description: build_description(game),
            location: game.venue.name.clone(),
        })
    }

    /// Normalize every game in order. Failures are logged and recorded, never fatal.
    pub fn normalize_all<'a>(&self, games: impl IntoIterator<Item = &'a RawGame>) -> Batch {
        let mut batch = Batch::default();
        for game in games {
            match game.status() {
                GameStatus::Final => batch.completed += 1,
                GameStatus::InProgress => batch.live += 1,
                GameStatus::Postponed => {}
                GameStatus::Scheduled | GameStatus::Other => batch.scheduled += 1,
            }

            match self.normalize(game) {
                Ok(event) => batch.events.push(event),
                Err(reason) => {
                    warn!(game_pk = game.game_pk, reason = %reason, "Skipping game");
                    batch.skipped.push(SkippedGame { game_pk: game.game_pk, reason });
                }
            }
        }
        info!(
            rendered = batch.rendered(),
            skipped = batch.skipped.len(),
            completed = batch.completed,
            scheduled = batch.scheduled,
            live = batch.live,
            "Normalized schedule"
        );
        batch
    }
}
