use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Parser;

use crate::config::{DEFAULT_API_URL, ResolverConfig, SeasonConfig};
use crate::error::ConfigError;

/// Publish the MLB postseason schedule as an ICS calendar.
#[derive(Debug, Clone, Parser)]
#[command(name = "mlb-postseason-ics", version, about)]
pub struct Cli {
    /// Output ICS file path [default: public/mlb_postseason_<season>.ics]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep regenerating the file until interrupted
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between updates in watch mode
    #[arg(short, long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Season year [default: current year]
    #[arg(long)]
    pub season: Option<i32>,

    /// First schedule date, YYYY-MM-DD [default: <season>-09-30]
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last schedule date, YYYY-MM-DD [default: <season>-11-02]
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Schedule endpoint
    #[arg(long, env = "MLB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Assumed length of every game
    #[arg(long, default_value_t = 180, value_parser = clap::value_parser!(i64).range(1..))]
    pub duration_minutes: i64,

    /// Run even outside the postseason window
    #[arg(long)]
    pub force: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Season settings, with `today` supplying the default year.
    pub fn season_config(&self, today: NaiveDate) -> Result<SeasonConfig, ConfigError> {
        let mut config = SeasonConfig::for_season(self.season.unwrap_or_else(|| today.year()));
        if let Some(start) = self.start_date {
            config.start_date = start;
        }
        if let Some(end) = self.end_date {
            config.end_date = end;
        }
        if config.start_date > config.end_date {
            return Err(ConfigError::InvertedWindow {
                start: config.start_date,
                end: config.end_date,
            });
        }
        config.api_url = self.api_url.clone();
        Ok(config)
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            duration: chrono::Duration::minutes(self.duration_minutes),
            ..ResolverConfig::default()
        }
    }

    pub fn output_path(&self, season: &SeasonConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(season.default_output_path()))
    }
}
