use chrono::{Duration, TimeZone, Utc};

use mlb_postseason_ics::config::ResolverConfig;
use mlb_postseason_ics::error::SkipReason;
use mlb_postseason_ics::time_resolver::{
    is_placeholder_name, is_unconfirmed_minute, parse_start, ParsedStart, TimeResolver,
};

fn resolver() -> TimeResolver {
    TimeResolver::new(ResolverConfig::default())
}

fn start_of(raw: &str, away: &str, home: &str) -> String {
    resolver()
        .resolve(Some(raw), away, home, false)
        .expect("timestamp should resolve")
        .start_ics()
}

#[test]
fn utc_timestamp_is_used_as_is_with_three_hour_end() {
    let slot = resolver()
        .resolve(Some("2025-10-15T23:08:00Z"), "New York Yankees", "Boston Red Sox", false)
        .unwrap();
    assert_eq!(slot.start_ics(), "20251015T230800Z");
    assert_eq!(slot.end_ics(), "20251016T020800Z");
}

#[test]
fn minute_33_moves_to_placeholder_kickoff_regardless_of_hour() {
    for raw in [
        "2025-10-24T07:33:00Z",
        "2025-10-24T17:33:00Z",
        "2025-10-24T23:33:00Z",
    ] {
        assert_eq!(
            start_of(raw, "Los Angeles Dodgers", "Toronto Blue Jays"),
            "20251024T190800Z",
            "raw was {}",
            raw
        );
    }
}

#[test]
fn minute_33_uses_the_eastern_calendar_date() {
    // 00:33Z on Oct 5 is still the evening of Oct 4 in New York.
    assert_eq!(
        start_of("2025-10-05T00:33:00Z", "Los Angeles Dodgers", "Philadelphia Phillies"),
        "20251004T190800Z"
    );
}

#[test]
fn placeholder_kickoff_follows_daylight_saving_change() {
    // DST ends Nov 2 2025; 15:08 EST is 20:08Z.
    assert_eq!(
        start_of("2025-11-03T01:33:00Z", "Los Angeles Dodgers", "Toronto Blue Jays"),
        "20251102T200800Z"
    );
}

#[test]
fn minute_33_with_numeric_offset_is_taken_literally() {
    assert_eq!(
        start_of("2025-09-30T13:33:00-04:00", "San Diego Padres", "Chicago Cubs"),
        "20250930T173300Z"
    );
}

#[test]
fn tbd_team_ignores_the_upstream_time_of_day() {
    assert_eq!(start_of("2025-10-20T13:08:00Z", "TBD", "Boston Red Sox"), "20251020T190800Z");
}

#[test]
fn winner_of_placeholder_on_home_side_ignores_time() {
    assert_eq!(
        start_of("2025-10-04T22:08:00Z", "Detroit Tigers", "Winner of ALWC2"),
        "20251004T190800Z"
    );
}

#[test]
fn start_time_tbd_flag_uses_placeholder_kickoff() {
    let slot = resolver()
        .resolve(Some("2025-10-08T20:08:00Z"), "Seattle Mariners", "Detroit Tigers", true)
        .unwrap();
    assert_eq!(slot.start_ics(), "20251008T190800Z");
}

#[test]
fn numeric_offset_is_converted_to_utc() {
    assert_eq!(
        start_of("2025-09-30T13:08:00-04:00", "San Diego Padres", "Chicago Cubs"),
        "20250930T170800Z"
    );
}

#[test]
fn timestamp_without_offset_is_read_as_utc() {
    assert_eq!(
        start_of("2025-09-30T17:08:00", "San Diego Padres", "Chicago Cubs"),
        "20250930T170800Z"
    );
}

#[test]
fn bare_date_gets_placeholder_kickoff() {
    assert_eq!(
        start_of("2025-09-30", "San Diego Padres", "Chicago Cubs"),
        "20250930T190800Z"
    );
}

#[test]
fn missing_or_blank_timestamp_is_skipped() {
    let r = resolver();
    assert_eq!(
        r.resolve(None, "Seattle Mariners", "Detroit Tigers", false),
        Err(SkipReason::MissingTimestamp)
    );
    assert_eq!(
        r.resolve(Some("   "), "Seattle Mariners", "Detroit Tigers", false),
        Err(SkipReason::MissingTimestamp)
    );
}

#[test]
fn garbage_timestamp_is_skipped() {
    let err = resolver()
        .resolve(Some("next tuesday"), "Seattle Mariners", "Detroit Tigers", false)
        .unwrap_err();
    assert_eq!(err, SkipReason::UnparseableTimestamp("next tuesday".to_string()));
}

#[test]
fn duration_is_constant_for_every_shape() {
    let r = TimeResolver::new(ResolverConfig {
        duration: Duration::minutes(210),
        ..ResolverConfig::default()
    });
    let cases = [
        ("2025-10-15T23:08:00Z", "New York Yankees", "Boston Red Sox"),
        ("2025-10-24T07:33:00Z", "Los Angeles Dodgers", "Toronto Blue Jays"),
        ("2025-10-20T13:08:00Z", "TBD", "Boston Red Sox"),
        ("2025-09-30T13:08:00-04:00", "San Diego Padres", "Chicago Cubs"),
        ("2025-09-30", "San Diego Padres", "Chicago Cubs"),
    ];
    for (raw, away, home) in cases {
        let slot = r.resolve(Some(raw), away, home, false).unwrap();
        assert_eq!(slot.end - slot.start, Duration::minutes(210), "raw was {}", raw);
    }
}

#[test]
fn strategies_are_tried_in_order() {
    assert_eq!(parse_start("2025-10-15T23:08:00Z").map(|(n, _)| n), Some("utc_suffixed"));
    assert_eq!(parse_start("2025-09-30T13:08:00-04:00").map(|(n, _)| n), Some("numeric_offset"));
    assert_eq!(parse_start("2025-09-30T17:08:00").map(|(n, _)| n), Some("naive_utc"));
    assert_eq!(parse_start("2025-09-30").map(|(n, _)| n), Some("bare_date"));
    assert!(parse_start("30/09/2025").is_none());

    let (_, parsed) = parse_start("2025-10-24T07:33:00Z").unwrap();
    assert_eq!(
        parsed,
        ParsedStart::Unconfirmed(Utc.with_ymd_and_hms(2025, 10, 24, 7, 33, 0).unwrap())
    );
}

#[test]
fn placeholder_and_minute_predicates() {
    assert!(is_placeholder_name("TBD"));
    assert!(is_placeholder_name("Winner of NLWC1"));
    assert!(is_placeholder_name("Higher Seed"));
    assert!(is_placeholder_name("Lower Seed"));
    assert!(!is_placeholder_name("Boston Red Sox"));

    assert!(is_unconfirmed_minute(&Utc.with_ymd_and_hms(2025, 10, 24, 7, 33, 0).unwrap()));
    assert!(!is_unconfirmed_minute(&Utc.with_ymd_and_hms(2025, 10, 24, 7, 8, 0).unwrap()));
}
