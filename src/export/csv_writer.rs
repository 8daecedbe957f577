//! CSV output of flattened curves.
use std::{fs, io};

use camino::Utf8Path;
use tracing::info;

use crate::{
    curves::CurveRecord,
    export::flatten::{FlatCurveRow, CURVE_COLUMNS},
    ig_errors::IgError,
};

/// Write curves as CSV to any writer: a header row, then one row per curve.
///
/// Arguments
/// -----------------
/// * `writer` – Destination.
/// * `curves` – Curves to write, in order.
///
/// Return
/// ----------
/// * The number of data rows written. The header is written even when
///   `curves` is empty.
pub fn write_curves<W: io::Write>(writer: W, curves: &[CurveRecord]) -> Result<usize, IgError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CURVE_COLUMNS)?;
    for curve in curves {
        csv_writer.serialize(FlatCurveRow::from(curve))?;
    }
    csv_writer.flush()?;
    Ok(curves.len())
}

/// Write curves to a CSV file, creating the parent directory if needed.
///
/// Arguments
/// -----------------
/// * `path` – Destination file.
/// * `curves` – Curves to write.
/// * `write_empty` – When `curves` is empty, write a header-only file instead of
///   failing.
///
/// Return
/// ----------
/// * The number of data rows written, or [`IgError::NoCurves`] when `curves` is
///   empty and `write_empty` is false (no file is created in that case).
pub fn write_curves_csv(
    path: &Utf8Path,
    curves: &[CurveRecord],
    write_empty: bool,
) -> Result<usize, IgError> {
    if curves.is_empty() && !write_empty {
        return Err(IgError::NoCurves(path.to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(path)?;
    let rows = write_curves(io::BufWriter::new(file), curves)?;
    info!("Finished! Written to {path}");
    Ok(rows)
}
