//! # Track curves
//!
//! Builds one [`CurveRecord`] per association link: the four cubic Bezier control
//! points of the track (`pos1`, `han1`, `han2`, `pos2`) together with the scalar
//! track parameters copied from the referenced track row.
//!
//! ## Overview
//! -----------------
//! [`build_curves`] walks the links of a [`ResolvedEvent`] in order. For each link
//! it bounds-checks both indices, reads the track and extras rows through their
//! named views, then places the handles with
//! [`control_handles`](crate::curves::bezier::control_handles).
//!
//! ## Error semantics
//! -----------------
//! The build is **all-or-nothing**: the first out-of-range index
//! ([`IgError::IndexOutOfRange`]) or malformed row ([`IgError::MalformedRecord`])
//! aborts the document and no record is returned.
//!
//! ## Ordering & sharing
//! -----------------
//! * Output order equals link order, one record per link.
//! * A track or extras index may be referenced by several links; each link is
//!   processed on its own.
//!
//! ## Example
//! -----------------
//! ```rust
//! use igcurve::event::document::decode_document;
//! use igcurve::event::resolver::resolve;
//! use igcurve::curves::build_curves;
//!
//! # fn demo() -> Result<(), igcurve::ig_errors::IgError> {
//! let doc = decode_document(
//!     "{'Collections': {'Tracks_V1': [(0, 0, 5.0, 0.1, 0.2, 1, 2.5, 7)],
//!                       'Extras_V1': [((0, 0, 0), (1, 0, 0), (4, 0, 0), (1, 0, 0))]},
//!       'Associations': {'TrackExtras_V1': [((1, 0), (2, 0))]}}",
//! )?;
//! let curves = build_curves(&resolve(&doc)?)?;
//! assert_eq!(curves[0].han1.x, 1.0);
//! # Ok(()) }
//! # demo().unwrap();
//! ```
pub mod bezier;

use crate::{
    constants::{Point3, EXTRAS_COLLECTION_NAME},
    event::{
        records::{AssociationLink, ExtraRecord, TrackRecord},
        resolver::ResolvedEvent,
    },
    ig_errors::{IgError, RecordKind},
};

use bezier::{control_handles, cubic_point};

/// Bezier representation of one track plus its scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRecord {
    pub pos1: Point3,
    pub han1: Point3,
    pub han2: Point3,
    pub pos2: Point3,
    pub pt: f64,
    pub phi: f64,
    pub eta: f64,
    pub charge: f64,
    pub chi2: f64,
    pub ndof: f64,
}

impl CurveRecord {
    /// Assemble the curve of one track from its scalars and its extras.
    pub fn from_records(track: &TrackRecord, extra: &ExtraRecord) -> Self {
        let (han1, han2) = control_handles(
            &extra.position1,
            &extra.direction1,
            &extra.position2,
            &extra.direction2,
        );

        CurveRecord {
            pos1: extra.position1,
            han1,
            han2,
            pos2: extra.position2,
            pt: track.pt,
            phi: track.phi,
            eta: track.eta,
            charge: track.charge,
            chi2: track.chi2,
            ndof: track.ndof,
        }
    }

    /// Point of the curve at `t`, `t = 0` at `pos1` and `t = 1` at `pos2`.
    pub fn point_at(&self, t: f64) -> Point3 {
        cubic_point(&self.pos1, &self.han1, &self.han2, &self.pos2, t)
    }
}

fn check_bounds(
    link_idx: usize,
    kind: RecordKind,
    index: usize,
    len: usize,
) -> Result<usize, IgError> {
    if index < len {
        Ok(index)
    } else {
        Err(IgError::IndexOutOfRange {
            link: link_idx,
            kind,
            index,
            len,
        })
    }
}

fn build_one(
    event: &ResolvedEvent<'_>,
    link_idx: usize,
    link: &AssociationLink,
) -> Result<CurveRecord, IgError> {
    let ti = check_bounds(
        link_idx,
        RecordKind::Track,
        link.track_index,
        event.tracks.len(),
    )?;
    let ei = check_bounds(
        link_idx,
        RecordKind::Extra,
        link.extra_index,
        event.extras.len(),
    )?;

    let track = TrackRecord::from_row(&event.tracks[ti], event.track_collection, ti)?;
    let extra = ExtraRecord::from_row(&event.extras[ei], EXTRAS_COLLECTION_NAME, ei)?;
    Ok(CurveRecord::from_records(&track, &extra))
}

/// Build one curve per association link of a resolved event.
///
/// Arguments
/// -----------------
/// * `event` – Track rows, extras rows and links of one document.
///
/// Return
/// ----------
/// * The curves in link order, or the first error met (no partial output).
///
/// See also
/// ------------
/// * [`resolve`](crate::event::resolver::resolve) – Produces the [`ResolvedEvent`].
/// * [`control_handles`] – Handle placement heuristic.
pub fn build_curves(event: &ResolvedEvent<'_>) -> Result<Vec<CurveRecord>, IgError> {
    event
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| build_one(event, i, link))
        .collect()
}
