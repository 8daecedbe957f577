//! # Tabular export
//!
//! * [`flatten`](crate::export::flatten) – [`CurveRecord`](crate::curves::CurveRecord) → fixed 18-column row.
//! * [`csv_writer`](crate::export::csv_writer) – Header + rows through the `csv` crate.
//!
//! Zero curves is reported as [`IgError::NoCurves`](crate::ig_errors::IgError::NoCurves)
//! so the caller can decide between skipping the file and writing a header-only one.
pub mod csv_writer;
pub mod flatten;
