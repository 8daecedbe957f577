#![allow(dead_code)]

use std::io::{Cursor, Write};

use approx::assert_relative_eq;
use igcurve::constants::Point3;
use igcurve::CurveRecord;
use zip::write::SimpleFileOptions;

/// Track row with `pt..ndof` at offsets 2..=7.
pub fn track_row(pt: f64, phi: f64, eta: f64, charge: f64, chi2: f64, ndof: f64) -> String {
    format!("[0, 0, {pt:?}, {phi:?}, {eta:?}, {charge:?}, {chi2:?}, {ndof:?}, [0.0, 0.0, 0.0]]")
}

/// Extras row `[pos1, dir1, pos2, dir2]`.
pub fn extra_row(pos1: [f64; 3], dir1: [f64; 3], pos2: [f64; 3], dir2: [f64; 3]) -> String {
    format!("[{pos1:?}, {dir1:?}, {pos2:?}, {dir2:?}]")
}

/// Strict-JSON event document with the given track alias, rows and links.
pub fn event_json(
    track_alias: &str,
    tracks: &[String],
    extras: &[String],
    links: &[(usize, usize)],
) -> String {
    let links = links
        .iter()
        .map(|(t, e)| format!("[[3, {t}], [4, {e}]]"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{
  "Types": {{"{track_alias}": [["pt", "double"]], "Extras_V1": [["pos_1", "v3d"]]}},
  "Collections": {{
    "{track_alias}": [{}],
    "Extras_V1": [{}]
  }},
  "Associations": {{"TrackExtras_V1": [{links}]}}
}}"#,
        tracks.join(", "),
        extras.join(", ")
    )
}

/// Event with two tracks, two extras and two links (0→0, 1→1).
pub fn two_curve_event(pt_offset: f64) -> String {
    event_json(
        "Tracks_V2",
        &[
            track_row(pt_offset + 1.0, 0.1, 0.2, 1.0, 3.0, 5.0),
            track_row(pt_offset + 2.0, -0.1, -0.2, -1.0, 6.0, 10.0),
        ],
        &[
            extra_row([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [4.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            extra_row([0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 8.0, 0.0], [0.0, 0.5, 0.0]),
        ],
        &[(0, 0), (1, 1)],
    )
}

/// In-memory zip archive holding the given members.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let raw: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(name, body)| (*name, body.as_bytes()))
        .collect();
    zip_raw_bytes(&raw)
}

/// In-memory zip archive whose members may hold arbitrary bytes.
pub fn zip_raw_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn assert_point_close(actual: &Point3, expected: [f64; 3], epsilon: f64) {
    assert_relative_eq!(*actual, Point3::from(expected), epsilon = epsilon);
}

pub fn assert_curve_close(actual: &CurveRecord, expected: &CurveRecord, epsilon: f64) {
    assert_relative_eq!(actual.pos1, expected.pos1, epsilon = epsilon);
    assert_relative_eq!(actual.han1, expected.han1, epsilon = epsilon);
    assert_relative_eq!(actual.han2, expected.han2, epsilon = epsilon);
    assert_relative_eq!(actual.pos2, expected.pos2, epsilon = epsilon);
    assert_relative_eq!(actual.pt, expected.pt, epsilon = epsilon);
    assert_relative_eq!(actual.phi, expected.phi, epsilon = epsilon);
    assert_relative_eq!(actual.eta, expected.eta, epsilon = epsilon);
    assert_relative_eq!(actual.charge, expected.charge, epsilon = epsilon);
    assert_relative_eq!(actual.chi2, expected.chi2, epsilon = epsilon);
    assert_relative_eq!(actual.ndof, expected.ndof, epsilon = epsilon);
}
