use mlb_postseason_ics::writer::{try_write, write_calendar};

#[test]
fn writes_file_and_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join("nested").join("out.ics");

    assert!(write_calendar(&path, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"
    );
}

#[test]
fn overwrites_existing_file_and_reports_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ics");
    std::fs::write(&path, "a much longer previous calendar body").unwrap();

    let written = try_write(&path, "short").unwrap();
    assert_eq!(written.bytes, 5);
    assert!(written.path.is_absolute());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn unwritable_target_returns_false() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!write_calendar(dir.path(), "anything"));
}
