use crate::model::game::RawGame;
use crate::model::status::GameStatus;
use crate::model::team::{Team, TeamSide};
use crate::time_resolver::is_placeholder_name;

/// Compact forms for clubs whose first word alone would be ambiguous or wrong.
pub const SHORT_NAMES: [(&str, &str); 10] = [
    ("Los Angeles Dodgers", "LA Dodgers"),
    ("Los Angeles Angels", "LA Angels"),
    ("New York Yankees", "NY Yankees"),
    ("New York Mets", "NY Mets"),
    ("Chicago White Sox", "Chi White Sox"),
    ("Chicago Cubs", "Chi Cubs"),
    ("San Francisco Giants", "SF Giants"),
    ("San Diego Padres", "San Diego"),
    ("Tampa Bay Rays", "Tampa Bay"),
    ("Kansas City Royals", "Kansas City"),
];

/// Display name for a club in titles.
///
/// Placeholders pass through, then the lookup table, then upstream's
/// `shortName`, then the first word of the full name ("St. Louis" style
/// abbreviated city names keep two words).
pub fn short_team_name(team: &Team) -> String {
    if is_placeholder_name(&team.name) {
        return team.name.clone();
    }
    if let Some((_, short)) = SHORT_NAMES.iter().find(|(full, _)| *full == team.name) {
        return short.to_string();
    }
    if let Some(short) = team.short_name.as_deref().filter(|s| !s.trim().is_empty()) {
        return short.to_string();
    }
    shorten_full_name(&team.name)
}

pub fn shorten_full_name(full: &str) -> String {
    let words: Vec<&str> = full.split_whitespace().collect();
    match words.as_slice() {
        [] => full.to_string(),
        [first, second, ..] if first.ends_with('.') => format!("{} {}", first, second),
        [first, ..] => first.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Away,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesState {
    Won(Side),
    Leads(Side),
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRecord {
    pub away_wins: u32,
    pub home_wins: u32,
    pub games_in_series: u32,
}

impl SeriesRecord {
    pub fn from_game(game: &RawGame) -> Self {
        SeriesRecord {
            away_wins: game.teams.away.league_record.wins,
            home_wins: game.teams.home.league_record.wins,
            games_in_series: game.games_in_series,
        }
    }

    /// Wins needed to clinch a best-of-N series; `None` when N is unknown.
    pub fn wins_needed(&self) -> Option<u32> {
        (self.games_in_series > 0).then(|| self.games_in_series / 2 + 1)
    }

    pub fn state(&self) -> SeriesState {
        let clinched = |wins: u32| self.wins_needed().is_some_and(|needed| wins >= needed);
        if clinched(self.away_wins) {
            SeriesState::Won(Side::Away)
        } else if clinched(self.home_wins) {
            SeriesState::Won(Side::Home)
        } else if self.away_wins > self.home_wins {
            SeriesState::Leads(Side::Away)
        } else if self.home_wins > self.away_wins {
            SeriesState::Leads(Side::Home)
        } else {
            SeriesState::Tied
        }
    }

    /// `(2-1) NY Yankees Leads`, `(3-1) Toronto Wins`, `(1-1) Tied`. Tally is always away-home.
    pub fn marker(&self, away_short: &str, home_short: &str) -> String {
        let tally = format!("({}-{})", self.away_wins, self.home_wins);
        let name = |side: Side| match side {
            Side::Away => away_short,
            Side::Home => home_short,
        };
        match self.state() {
            SeriesState::Won(side) => format!("{} {} Wins", tally, name(side)),
            SeriesState::Leads(side) => format!("{} {} Leads", tally, name(side)),
            SeriesState::Tied => format!("{} Tied", tally),
        }
    }
}

/// Series code plus game number, e.g. `ALDS3`, `WS7`, `NLWC2`.
pub fn series_label(game: &RawGame) -> String {
    let number = game.series_game_number;
    match game.game_type.series_code() {
        Some(code) => {
            let league = game
                .league_abbreviation()
                .filter(|_| game.game_type.takes_league_prefix())
                .unwrap_or("");
            format!("{}{}{}", league, code, number)
        }
        None => format!("Postseason {}", number),
    }
}

/// Event title. Finished games show only the series line; scores go to the description.
pub fn build_summary(game: &RawGame) -> String {
    let away = short_team_name(&game.teams.away.team);
    let home = short_team_name(&game.teams.home.team);
    let label = series_label(game);
    let record = SeriesRecord::from_game(game).marker(&away, &home);

    if game.status().is_final() {
        format!("{} {}", label, record)
    } else {
        format!("{} {} · {} @ {}", label, record, away, home)
    }
}

fn score_of(side: &TeamSide) -> u32 {
    side.score.unwrap_or(0)
}

/// Multi-line event body: matchup (with final score), series, status, venue.
pub fn build_description(game: &RawGame) -> String {
    let away = short_team_name(&game.teams.away.team);
    let home = short_team_name(&game.teams.home.team);
    let status = game.status();

    let mut lines = Vec::with_capacity(5);
    if status.is_final() {
        lines.push(format!(
            "{} {} - {} {}",
            away,
            score_of(&game.teams.away),
            home,
            score_of(&game.teams.home)
        ));
    } else {
        lines.push(format!("{} @ {}", away, home));
    }
    if !game.series_description.is_empty() {
        lines.push(format!("Series: {}", game.series_description));
    }
    lines.push(format!("Status: {}", game.detailed_state()));
    lines.push(format!("Venue: {}", game.venue.name));

    if status == GameStatus::InProgress {
        if let Some(inning) = inning_line(game) {
            lines.push(inning);
        }
    }

    lines.join("\n")
}

/// `Inning: Top 7` from the hydrated linescore, when present.
pub fn inning_line(game: &RawGame) -> Option<String> {
    let linescore = game.linescore.as_ref()?;
    let inning = linescore.current_inning?;
    match linescore.inning_state.as_deref() {
        Some(state) if !state.is_empty() => Some(format!("Inning: {} {}", state, inning)),
        _ => Some(format!("Inning: {}", inning)),
    }
}
