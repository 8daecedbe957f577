//! # igcurve
//!
//! Decode iSpy detector-event files (strict JSON or the legacy Python-literal
//! dialect, alone or bundled in `.ig` zip archives) and derive, for every
//! reconstructed track, the four control points of a cubic Bezier curve together
//! with the track's scalar parameters. Results are written as flat CSV rows.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─▶ normalize ─▶ parse_document ─▶ resolve ─▶ build_curves ─▶ CSV rows
//! ```
//!
//! * [`event`] – dialect normalization, typed document, record views, section lookup.
//! * [`curves`] – Bezier handle placement and [`CurveRecord`] assembly.
//! * [`export`] – flattening and CSV writing.
//! * [`batch`] – sources, archives, parameters and the batch driver.
//!
//! ## Quick-Start
//!
//! ```rust,no_run
//! use igcurve::prelude::*;
//!
//! # fn run() -> Result<(), IgError> {
//! let source = EventSource::from_path("Zee_0.ig")?;
//! let params = ExportParams::builder().combine(true).build()?;
//! let report = export(&source, &params)?;
//! println!("{:#}", report.summary);
//! # Ok(()) }
//! ```
pub mod batch;
pub mod constants;
pub mod curves;
pub mod event;
pub mod export;
pub mod ig_errors;

pub use crate::batch::driver::{export, process_document};
pub use crate::curves::{build_curves, CurveRecord};
pub use crate::event::{dialect::normalize, document::parse_document, resolver::resolve};
pub use crate::ig_errors::IgError;

pub mod prelude {
    pub use crate::batch::driver::{
        collate_members, export, process_document, process_member, BatchOutcome, BatchReport,
        BatchSummary, OutputUnit,
    };
    pub use crate::batch::params::{ErrorPolicy, ExportParams};
    pub use crate::batch::source::{EventMember, EventSource};
    pub use crate::curves::{build_curves, CurveRecord};
    pub use crate::event::{
        dialect::normalize,
        document::{decode_document, parse_document, EventDocument},
        resolver::{resolve, ResolvedEvent},
    };
    pub use crate::ig_errors::IgError;
}
