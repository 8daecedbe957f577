//! # Batch driver
//!
//! Runs the decode-and-derive pipeline over every event of an [`EventSource`],
//! applies the [`ErrorPolicy`] and the combine mode, then writes one CSV file per
//! output unit.
//!
//! ## Overview
//! -----------------
//! * [`process_document`] – normalize → parse → resolve → build for one event;
//!   failures come back as [`IgError::Document`] naming the event and the stage.
//! * [`process_member`] – UTF-8 check of a loaded member, then [`process_document`].
//! * [`collate_members`] – pure collation of already-loaded members into
//!   [`OutputUnit`]s, in source-member order.
//! * [`export`] – load, collate, write; returns a [`BatchReport`].
//!
//! ## Output units
//! -----------------
//! * Single document → one unit named after the file.
//! * Archive, default mode → one unit per member that succeeded.
//! * Archive, combine mode → one unit holding every member's curves in member order.
//!
//! Units without curves are skipped at write time (with a warning) unless
//! [`ExportParams::write_empty`] is set.
//!
//! ## Error semantics
//! -----------------
//! * [`ErrorPolicy::Abort`] – the first failing document ends the batch before
//!   anything is written.
//! * [`ErrorPolicy::Skip`] – failing documents are logged, collected in
//!   [`BatchOutcome::failures`] and left out of every unit.
//!
//! ## See also
//! ------------
//! * [`ExportParams`] – Run configuration.
//! * [`write_curves_csv`] – CSV serialization of one unit.
use std::fmt;

use camino::Utf8PathBuf;
use tracing::{info, warn};

use crate::{
    batch::{
        params::{ErrorPolicy, ExportParams},
        progress_bar::MemberProgress,
        source::{EventMember, EventSource},
    },
    curves::{build_curves, CurveRecord},
    event::{document::decode_document, resolver::resolve},
    export::csv_writer::write_curves_csv,
    ig_errors::IgError,
};

/// Curves bound for one output file.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputUnit {
    /// File stem; the CSV is written as `<name>.csv`.
    pub name: String,
    /// Events that contributed, in order.
    pub documents: Vec<String>,
    pub curves: Vec<CurveRecord>,
}

/// Result of collating the members of a batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub units: Vec<OutputUnit>,
    /// Document failures left out under [`ErrorPolicy::Skip`].
    pub failures: Vec<IgError>,
    /// Number of events that were processed, failed ones included.
    pub documents: usize,
}

impl BatchOutcome {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            documents: self.documents,
            failed: self.failures.len(),
            units: self.units.len(),
            curves: self.units.iter().map(|u| u.curves.len()).sum(),
            written: 0,
        }
    }
}

/// Counters of a batch run.
///
/// Display
/// -----------------
/// * `{}` – single line, `documents=3, failed=1, units=2, curves=40, written=2`.
/// * `{:#}` – multi-line table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub documents: usize,
    pub failed: usize,
    pub units: usize,
    pub curves: usize,
    /// Files actually written.
    pub written: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Batch summary")?;
            writeln!(f, "-------------")?;
            writeln!(f, "documents : {}", self.documents)?;
            writeln!(f, "failed    : {}", self.failed)?;
            writeln!(f, "units     : {}", self.units)?;
            writeln!(f, "curves    : {}", self.curves)?;
            write!(f, "written   : {}", self.written)
        } else {
            write!(
                f,
                "documents={}, failed={}, units={}, curves={}, written={}",
                self.documents, self.failed, self.units, self.curves, self.written
            )
        }
    }
}

/// Files written by [`export`] and the run counters.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub written: Vec<Utf8PathBuf>,
    pub summary: BatchSummary,
}

/// Run the pipeline over the raw text of one event.
///
/// Arguments
/// -----------------
/// * `name` – Event identifier, attached to any error.
/// * `text` – Raw event text, dialect allowed.
///
/// Return
/// ----------
/// * One curve per association link, in link order, or an [`IgError::Document`]
///   wrapping the first failure.
pub fn process_document(name: &str, text: &str) -> Result<Vec<CurveRecord>, IgError> {
    let run = || -> Result<Vec<CurveRecord>, IgError> {
        let doc = decode_document(text)?;
        let event = resolve(&doc)?;
        build_curves(&event)
    };
    run().map_err(|e| e.in_document(name))
}

/// Run the pipeline over one loaded member.
///
/// A member that is not UTF-8 fails at the parse stage, like any other
/// unreadable document, and is named in the error.
pub fn process_member(member: &EventMember) -> Result<Vec<CurveRecord>, IgError> {
    let text = member.text().map_err(|e| e.in_document(&member.name))?;
    process_document(&member.name, text)
}

/// Collate loaded members into output units.
///
/// Arguments
/// -----------------
/// * `source` – Where the members came from; drives unit naming.
/// * `members` – Events in source order.
/// * `params` – Combine mode and error policy.
///
/// Return
/// ----------
/// * A [`BatchOutcome`] with units in member order, or the first document error
///   under [`ErrorPolicy::Abort`].
pub fn collate_members(
    source: &EventSource,
    members: &[EventMember],
    params: &ExportParams,
) -> Result<BatchOutcome, IgError> {
    let combine = params.combine && source.is_archive();
    let mut outcome = BatchOutcome::default();
    let mut combined = OutputUnit {
        name: source.combined_output_stem(),
        documents: Vec::new(),
        curves: Vec::new(),
    };

    let mut progress = MemberProgress::new(members.len());
    for member in members {
        info!("{}", member.name);
        outcome.documents += 1;

        let curves = match process_member(member) {
            Ok(curves) => curves,
            Err(e) => match params.error_policy {
                ErrorPolicy::Abort => {
                    progress.finish();
                    return Err(e);
                }
                ErrorPolicy::Skip => {
                    warn!("skipping document: {e}");
                    outcome.failures.push(e);
                    progress.advance(&member.name);
                    continue;
                }
            },
        };

        if combine {
            combined.documents.push(member.name.clone());
            combined.curves.extend(curves);
        } else {
            outcome.units.push(OutputUnit {
                name: source.member_output_stem(&member.name),
                documents: vec![member.name.clone()],
                curves,
            });
        }
        progress.advance(&member.name);
    }
    progress.finish();

    if combine {
        outcome.units.push(combined);
    }
    Ok(outcome)
}

/// Load every event of `source`, build the curves and write the CSV files.
///
/// Arguments
/// -----------------
/// * `source` – Single document or archive.
/// * `params` – Output directory, combine mode, error policy.
///
/// Return
/// ----------
/// * A [`BatchReport`] listing the written files, or the first I/O, archive or
///   (under [`ErrorPolicy::Abort`]) document error.
pub fn export(source: &EventSource, params: &ExportParams) -> Result<BatchReport, IgError> {
    info!("File: {}", source.path());
    let members = source.read_members(&params.excluded_members)?;
    let outcome = collate_members(source, &members, params)?;
    let mut summary = outcome.summary();

    let mut written = Vec::with_capacity(outcome.units.len());
    for unit in &outcome.units {
        let path = params.output_dir.join(format!("{}.csv", unit.name));
        match write_curves_csv(&path, &unit.curves, params.write_empty) {
            Ok(_) => written.push(path),
            Err(IgError::NoCurves(_)) => warn!("no curves for {}, nothing written", unit.name),
            Err(e) => return Err(e),
        }
    }

    summary.written = written.len();
    info!("{summary}");
    Ok(BatchReport { written, summary })
}
