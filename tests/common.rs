/// Shared helpers: write synthetic annotation / recording files.
use std::path::{Path, PathBuf};

#[allow(unused)]
/// Render `(concept, start, duration)` triples as an NSRR-style XML document.
pub fn annotation_xml(events: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <PSGAnnotation>\n<SoftwareVersion>Compumedics</SoftwareVersion>\n\
         <EpochLength>30</EpochLength>\n<ScoredEvents>\n",
    );
    for (concept, start, duration) in events {
        xml.push_str(&format!(
            "<ScoredEvent>\n<EventType>Stages|Stages</EventType>\n\
             <EventConcept>{concept}</EventConcept>\n<Start>{start}</Start>\n\
             <Duration>{duration}</Duration>\n</ScoredEvent>\n"
        ));
    }
    xml.push_str("</ScoredEvents>\n</PSGAnnotation>\n");
    xml
}

#[allow(unused)]
/// Write an annotation file into `dir`.
pub fn write_annotation(dir: &Path, name: &str, events: &[(&str, &str, &str)]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, annotation_xml(events))
        .unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}

#[allow(unused)]
/// Minimal EDF+ file: full header for `labels`, no data records on disk.
pub fn write_recording(dir: &Path, name: &str, n_records: i64, record_dur: f64, labels: &[&str]) -> PathBuf {
    fn pad(out: &mut Vec<u8>, s: &str, n: usize) {
        let mut v = s.as_bytes().to_vec();
        v.resize(n, b' ');
        out.extend(v);
    }
    let ns = labels.len();
    let mut h = Vec::new();
    pad(&mut h, "0", 8);
    pad(&mut h, "0001 M 01-JAN-1950 Subject", 80);
    pad(&mut h, "Startdate 01-JAN-2001 X X X", 80);
    pad(&mut h, "01.01.01", 8);
    pad(&mut h, "22.00.00", 8);
    pad(&mut h, &(256 + ns * 256).to_string(), 8);
    pad(&mut h, "EDF+C", 44);
    pad(&mut h, &n_records.to_string(), 8);
    pad(&mut h, &record_dur.to_string(), 8);
    pad(&mut h, &ns.to_string(), 4);
    for l in labels {
        pad(&mut h, l, 16);
    }
    // Remaining per-signal fields, content irrelevant here.
    h.resize(256 + ns * 256, b' ');

    let path = dir.join(name);
    std::fs::write(&path, h).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}

#[allow(unused)]
/// The six-event night used throughout the tests:
/// W W N2 N2 N2 W → runs [W 60] [N2 120] [W 30].
pub const SHORT_NIGHT: [(&str, &str, &str); 6] = [
    ("Wake|0", "0", "30.0"),
    ("Wake|0", "30", "30.0"),
    ("Stage 2 sleep|2", "60", "60.0"),
    ("Stage 2 sleep|2", "120", "30.0"),
    ("Stage 2 sleep|2", "150", "30.0"),
    ("Wake|0", "180", "30.0"),
];
