use serde_json::json;

use mlb_postseason_ics::config::ResolverConfig;
use mlb_postseason_ics::error::SkipReason;
use mlb_postseason_ics::model::game::RawGame;
use mlb_postseason_ics::normalizer::Normalizer;
use mlb_postseason_ics::time_resolver::{ICS_UTC_FORMAT, TimeResolver};

fn normalizer() -> Normalizer {
    Normalizer::new(TimeResolver::new(ResolverConfig::default()))
}

fn alds_game(game_date: Option<&str>, official_date: Option<&str>) -> RawGame {
    let mut value = json!({
        "gamePk": 813101,
        "gameType": "D",
        "status": { "statusCode": "S", "detailedState": "Scheduled" },
        "teams": {
            "away": { "team": { "name": "Seattle Mariners" } },
            "home": { "team": { "name": "Detroit Tigers" } }
        },
        "venue": { "name": "Comerica Park" },
        "seriesGameNumber": 2,
        "gamesInSeries": 5
    });
    if let Some(d) = game_date {
        value["gameDate"] = json!(d);
    }
    if let Some(d) = official_date {
        value["officialDate"] = json!(d);
    }
    serde_json::from_value(value).expect("valid game json")
}

fn start_of(game: &RawGame) -> String {
    normalizer()
        .normalize(game)
        .expect("game should normalize")
        .start_utc
        .format(ICS_UTC_FORMAT)
        .to_string()
}

#[test]
fn game_date_wins_over_official_date() {
    let game = alds_game(Some("2025-10-06T00:08:00Z"), Some("2025-10-05"));
    assert_eq!(start_of(&game), "20251006T000800Z");
}

#[test]
fn missing_game_date_falls_back_to_official_date_kickoff() {
    let game = alds_game(None, Some("2025-10-05"));
    assert_eq!(start_of(&game), "20251005T190800Z");
}

#[test]
fn blank_game_date_falls_back_to_official_date_kickoff() {
    assert_eq!(start_of(&alds_game(Some(""), Some("2025-10-05"))), "20251005T190800Z");
    assert_eq!(start_of(&alds_game(Some("  "), Some("2025-10-05"))), "20251005T190800Z");
}

#[test]
fn no_timestamp_at_all_is_skipped() {
    let err = normalizer().normalize(&alds_game(Some(""), None)).unwrap_err();
    assert_eq!(err, SkipReason::MissingTimestamp);
}

#[test]
fn normalized_event_carries_id_venue_and_titles() {
    let event = normalizer()
        .normalize(&alds_game(Some("2025-10-06T00:08:00Z"), None))
        .unwrap();
    assert_eq!(event.id, 813101);
    assert_eq!(event.location, "Comerica Park");
    assert!(event.summary.starts_with("DS2"), "summary was: {}", event.summary);
    assert!(event.description.contains("Seattle @ Detroit"), "description was: {}", event.description);
}
