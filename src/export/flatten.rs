//! Flat, fixed-shape rows for tabular output.
//!
//! Every [`CurveRecord`] flattens to the same 18 columns, vectors first
//! (`<name>_x`, `<name>_y`, `<name>_z`) then the track scalars, so that rows
//! from any number of documents share one header.
use serde::Serialize;

use crate::curves::CurveRecord;

/// Column names of a [`FlatCurveRow`], in output order.
pub const CURVE_COLUMNS: [&str; 18] = [
    "pos1_x", "pos1_y", "pos1_z", "han1_x", "han1_y", "han1_z", "han2_x", "han2_y", "han2_z",
    "pos2_x", "pos2_y", "pos2_z", "pt", "phi", "eta", "charge", "chi2", "ndof",
];

/// One flattened curve. Field order matches [`CURVE_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlatCurveRow {
    pub pos1_x: f64,
    pub pos1_y: f64,
    pub pos1_z: f64,
    pub han1_x: f64,
    pub han1_y: f64,
    pub han1_z: f64,
    pub han2_x: f64,
    pub han2_y: f64,
    pub han2_z: f64,
    pub pos2_x: f64,
    pub pos2_y: f64,
    pub pos2_z: f64,
    pub pt: f64,
    pub phi: f64,
    pub eta: f64,
    pub charge: f64,
    pub chi2: f64,
    pub ndof: f64,
}

impl From<&CurveRecord> for FlatCurveRow {
    fn from(c: &CurveRecord) -> Self {
        FlatCurveRow {
            pos1_x: c.pos1.x,
            pos1_y: c.pos1.y,
            pos1_z: c.pos1.z,
            han1_x: c.han1.x,
            han1_y: c.han1.y,
            han1_z: c.han1.z,
            han2_x: c.han2.x,
            han2_y: c.han2.y,
            han2_z: c.han2.z,
            pos2_x: c.pos2.x,
            pos2_y: c.pos2.y,
            pos2_z: c.pos2.z,
            pt: c.pt,
            phi: c.phi,
            eta: c.eta,
            charge: c.charge,
            chi2: c.chi2,
            ndof: c.ndof,
        }
    }
}

impl FlatCurveRow {
    /// Values in [`CURVE_COLUMNS`] order.
    pub fn values(&self) -> [f64; 18] {
        [
            self.pos1_x,
            self.pos1_y,
            self.pos1_z,
            self.han1_x,
            self.han1_y,
            self.han1_z,
            self.han2_x,
            self.han2_y,
            self.han2_z,
            self.pos2_x,
            self.pos2_y,
            self.pos2_z,
            self.pt,
            self.phi,
            self.eta,
            self.charge,
            self.chi2,
            self.ndof,
        ]
    }
}

/// Flatten a sequence of curves, keeping their order.
pub fn flatten_curves(curves: &[CurveRecord]) -> Vec<FlatCurveRow> {
    curves.iter().map(FlatCurveRow::from).collect()
}
