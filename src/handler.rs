use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::calendar::CalendarRenderer;
use crate::config::{ResolverConfig, SeasonConfig};
use crate::model::status::GameStatus;
use crate::normalizer::Normalizer;
use crate::schedule::Schedule;
use crate::summary::{inning_line, short_team_name};
use crate::time_resolver::TimeResolver;
use crate::writer::write_calendar;

/// Counts from one fetch → normalize → render → write pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub completed: usize,
    pub scheduled: usize,
    pub live: usize,
    pub written: bool,
}

impl CycleReport {
    pub fn message(&self) -> String {
        if self.fetched == 0 && !self.written {
            return "No schedule data; calendar left untouched".to_string();
        }
        format!(
            "{} of {} games rendered ({} skipped; {} completed, {} scheduled, {} live); file {}",
            self.rendered,
            self.fetched,
            self.skipped,
            self.completed,
            self.scheduled,
            self.live,
            if self.written { "written" } else { "not written" }
        )
    }
}

/// Everything one cycle needs, built once from configuration.
pub struct Pipeline {
    season: SeasonConfig,
    normalizer: Normalizer,
    renderer: CalendarRenderer,
    output: PathBuf,
}

impl Pipeline {
    pub fn new(season: SeasonConfig, resolver: ResolverConfig, output: PathBuf) -> Self {
        let renderer = CalendarRenderer::new(&season);
        Self {
            season,
            normalizer: Normalizer::new(TimeResolver::new(resolver)),
            renderer,
            output,
        }
    }

    /// Fetch the schedule and publish it. A failed fetch leaves the existing file in place.
    #[instrument(level = "info", skip(self), fields(output = %self.output.display()))]
    pub fn run_cycle(&self) -> CycleReport {
        let schedule = Schedule::fetch(&self.season);
        if !schedule.available {
            let report = CycleReport::default();
            warn!("{}", report.message());
            return report;
        }
        self.publish(&schedule, Utc::now())
    }

    /// Normalize, render and write an already fetched schedule.
    pub fn publish(&self, schedule: &Schedule, now: DateTime<Utc>) -> CycleReport {
        let mut batch = self.normalizer.normalize_all(schedule.response.games());
        batch.skipped.extend(schedule.rejected.iter().cloned());
        log_live_games(schedule);

        let ics = self.renderer.render(&batch.events, now);
        let written = write_calendar(&self.output, &ics);

        let report = CycleReport {
            fetched: schedule.record_count(),
            rendered: batch.rendered(),
            skipped: batch.skipped.len(),
            completed: batch.completed,
            scheduled: batch.scheduled,
            live: batch.live,
            written,
        };
        info!("{}", report.message());
        report
    }
}

/// Scoreboard line for every game currently being played.
fn log_live_games(schedule: &Schedule) {
    for game in schedule.response.games().filter(|g| g.status() == GameStatus::InProgress) {
        let away = &game.teams.away;
        let home = &game.teams.home;
        let inning = inning_line(game).unwrap_or_default();
        info!(
            game_pk = game.game_pk,
            "LIVE {} {} @ {} {} {}",
            short_team_name(&away.team),
            away.score.unwrap_or(0),
            short_team_name(&home.team),
            home.score.unwrap_or(0),
            inning
        );
    }
}
