mod common;
use approx::assert_abs_diff_eq;
use common::{annotation_xml, write_annotation, write_recording, SHORT_NIGHT};
use sleep_entropy::{
    merge_runs, parse_annotation_str, sleep_temporal_entropy, EntropyConfig, EntropyOutcome, Error,
    RecordingReadError, SleepStage,
};

/// H(2/3, 1/3) = log2(3) − 2/3
const H_TWO_THIRDS: f64 = 0.918_295_834_054_489_6;

#[test]
fn short_night_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 7, 30.0, &["EEG", "EOG(L)"]);
    let xml = write_annotation(dir.path(), "night-nsrr.xml", &SHORT_NIGHT);

    let report = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap();
    let rec = report.recording.as_ref().unwrap();
    assert_abs_diff_eq!(rec.duration_secs(), 210.0, epsilon = 1e-9);
    assert_eq!(rec.labels, vec!["EEG", "EOG(L)"]);
    assert_eq!(report.n_scored, 6);
    assert_eq!(report.n_events, 6);
    assert_eq!(report.n_runs, 3);

    let r = report.outcome.result().expect("computed result");
    assert_abs_diff_eq!(r.stage(SleepStage::Wake).unwrap(), H_TWO_THIRDS, epsilon = 1e-12);
    assert_eq!(r.stage(SleepStage::N2), None);
    assert_eq!(r.stage(SleepStage::N1), None);
    assert_eq!(r.stage(SleepStage::N3), None);
    assert_eq!(r.stage(SleepStage::Rem), None);
    assert_eq!(r.nrem(), None);
    // p = [60, 120, 30] / 210
    let p = [60.0 / 210.0, 120.0 / 210.0, 30.0 / 210.0];
    let expected: f64 = -p.iter().map(|&x: &f64| x * x.log2()).sum::<f64>();
    assert_abs_diff_eq!(r.overall().unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn json_output_shape() {
    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 7, 30.0, &["EEG"]);
    let xml = write_annotation(dir.path(), "night-nsrr.xml", &SHORT_NIGHT);
    let report = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap();

    let json = serde_json::to_value(report.outcome).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 7);
    assert!(obj["N2_Time_Entropy"].is_null());
    assert!(obj["Overall_Time_Entropy"].is_f64());
}

#[test]
fn unrecognized_only_gives_empty_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 2, 30.0, &["EEG"]);
    let xml = write_annotation(
        dir.path(),
        "unscored.xml",
        &[("Unscored|9", "0", "30"), ("Unscored|9", "30", "30")],
    );
    let report = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap();
    assert_eq!(report.outcome, EntropyOutcome::Empty);
    assert_eq!(report.n_runs, 0);
    assert_eq!(report.dropped["Unscored"], 2);
    assert_eq!(serde_json::to_string(&report.outcome).unwrap(), "{}");
}

#[test]
fn single_run_is_computed_not_empty() {
    // One run: every key undefined, but the outcome is Computed, not Empty.
    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 2, 30.0, &["EEG"]);
    let xml = write_annotation(dir.path(), "one.xml", &[("Wake|0", "0", "30"), ("Wake|0", "30", "30")]);
    let report = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap();
    let r = report.outcome.result().unwrap();
    assert!(r.entries().all(|(_, v)| v.is_none()));
}

#[test]
fn unreadable_recording_is_fatal_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write_annotation(dir.path(), "night-nsrr.xml", &SHORT_NIGHT);
    let err = sleep_temporal_entropy(dir.path().join("missing.edf"), &xml, &EntropyConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::Recording(RecordingReadError::Open { .. })));
}

#[test]
fn optional_recording_falls_back_to_annotation() {
    let dir = tempfile::tempdir().unwrap();
    let xml = write_annotation(dir.path(), "night-nsrr.xml", &SHORT_NIGHT);
    let cfg = EntropyConfig { recording_required: false };
    let report = sleep_temporal_entropy(dir.path().join("missing.edf"), &xml, &cfg).unwrap();
    assert!(report.recording.is_none());
    assert_abs_diff_eq!(
        report.outcome.result().unwrap().stage(SleepStage::Wake).unwrap(),
        H_TWO_THIRDS,
        epsilon = 1e-12
    );
}

#[test]
fn malformed_annotation_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 2, 30.0, &["EEG"]);
    let xml = dir.path().join("broken.xml");
    std::fs::write(&xml, "<PSGAnnotation><ScoredEvents>").unwrap();
    let err = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn dropped_events_do_not_split_runs() {
    // The arousal between the two Wakes is discarded before merging, and
    // Stage 4 is folded into N3, so both pairs coalesce.
    let events = [
        ("Wake|0", "0", "30"),
        ("Arousal|Arousal ()", "20", "5"),
        ("Wake|0", "30", "60"),
        ("Stage 3 sleep|3", "90", "30"),
        ("Stage 4 sleep|4", "120", "30"),
        ("Wake|0", "150", "30"),
    ];
    let parsed = parse_annotation_str(&annotation_xml(&events)).unwrap();
    let runs: Vec<_> = merge_runs(&parsed.events)
        .iter()
        .map(|r| (r.stage, r.total_duration))
        .collect();
    use SleepStage::*;
    assert_eq!(runs, vec![(Wake, 90.0), (N3, 60.0), (Wake, 30.0)]);

    let dir = tempfile::tempdir().unwrap();
    let edf = write_recording(dir.path(), "night.edf", 6, 30.0, &["EEG"]);
    let xml = write_annotation(dir.path(), "night-nsrr.xml", &events);
    let report = sleep_temporal_entropy(&edf, &xml, &EntropyConfig::default()).unwrap();
    assert_eq!(report.n_runs, 3);
    assert_eq!(report.dropped["Arousal"], 1);

    let r = report.outcome.result().unwrap();
    // H(3/4, 1/4)
    assert_abs_diff_eq!(r.stage(Wake).unwrap(), 0.811_278_124_459_133, epsilon = 1e-12);
    assert_eq!(r.stage(N3), None);
    assert_eq!(r.nrem(), None);
    let p = [0.5, 1.0 / 3.0, 1.0 / 6.0];
    let expected: f64 = -p.iter().map(|&x: &f64| x * x.log2()).sum::<f64>();
    assert_abs_diff_eq!(r.overall().unwrap(), expected, epsilon = 1e-12);
}
