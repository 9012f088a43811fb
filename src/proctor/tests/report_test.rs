use crate::proctor::core::Tally;
use crate::proctor::report::Report;
use crate::proctor::tests::fixture::{center, left, right, Fixture};
use std::path::Path;

fn sample_tally() -> Tally {
    Tally {
        cheating: 3,
        no_cheating: 2,
        unknown: 1,
        total_frames: 6,
    }
}

#[test]
fn report_copies_tally_counts_without_recomputation() {
    let report = Report::new(Path::new("/videos/session.mp4"), &sample_tally());

    assert_eq!(report.video, "/videos/session.mp4");
    assert_eq!(report.total_frames, 6);
    assert_eq!(report.total_cheating, 3);
    assert_eq!(report.total_tidak_cheating, 2);
    assert_eq!(report.total_unknown, 1);
    assert!(report.cheating_detected);
}

#[test]
fn report_serializes_with_the_exact_key_set() {
    let report = Report::new(Path::new("/videos/session.mp4"), &sample_tally());

    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();

    let expected_keys = [
        "video",
        "total_frames",
        "total_cheating",
        "total_tidak_cheating",
        "total_unknown",
        "cheating_detected",
    ];
    for key in expected_keys {
        assert!(object.contains_key(key), "missing key {}", key);
    }
    assert_eq!(object.len(), expected_keys.len());
}

#[test]
fn report_written_from_a_scan_round_trips_through_the_json_file() {
    let mut fixture = Fixture::scripted(vec![left(), right(), center()]);
    let tally = fixture.proctor.scan(&mut fixture.source);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join(&fixture.config.output_filename);
    let report = Report::new(Path::new("/videos/session.mp4"), &tally);
    report.write_json(&output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    // indented output, not a single line
    assert!(text.lines().count() > 1);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["video"], "/videos/session.mp4");
    assert_eq!(value["total_frames"], 3);
    assert_eq!(value["total_cheating"], 2);
    assert_eq!(value["total_tidak_cheating"], 1);
    assert_eq!(value["total_unknown"], 0);
    assert_eq!(value["cheating_detected"], true);
}
