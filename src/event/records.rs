//! # Named views over positional rows
//!
//! Event rows carry no field names: a track is a tuple whose scalars sit at fixed
//! offsets, an extras row is a tuple of four 3-vectors, and an association link is
//! a pair of `[kind-tag, index]` references. This module is the only place that
//! knows those offsets.
//!
//! Field layout
//! -----------------
//! * **Track** – `[id, type, pt, phi, eta, charge, chi2, ndof, ...]`; offsets `2..=7`
//!   are read ([`TRACK_PT_OFFSET`]).
//! * **Extras** – `[pos1, dir1, pos2, dir2, ...]`, each a 3-element array.
//! * **Link** – `[[kind, track_index], [kind, extras_index]]`.
//!
//! Values are taken as-is: no range or unit validation is done on the scalars.
use serde_json::Value;

use crate::{
    constants::{
        Point3, Row, EXTRA_DIRECTION1_OFFSET, EXTRA_DIRECTION2_OFFSET, EXTRA_POSITION1_OFFSET,
        EXTRA_POSITION2_OFFSET, TRACK_PT_OFFSET, TRACK_SCALAR_COUNT,
    },
    ig_errors::IgError,
};

/// Scalar track parameters read from one track row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRecord {
    /// Transverse momentum.
    pub pt: f64,
    /// Azimuthal angle.
    pub phi: f64,
    /// Pseudorapidity.
    pub eta: f64,
    pub charge: f64,
    pub chi2: f64,
    pub ndof: f64,
}

/// Endpoints and tangent directions read from one extras row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraRecord {
    pub position1: Point3,
    pub direction1: Point3,
    pub position2: Point3,
    pub direction2: Point3,
}

/// One association entry: a track index paired with an extras index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationLink {
    pub track_index: usize,
    pub extra_index: usize,
}

fn malformed(collection: &str, index: usize, reason: impl Into<String>) -> IgError {
    IgError::MalformedRecord {
        collection: collection.to_string(),
        index,
        reason: reason.into(),
    }
}

fn row_fields<'a>(row: &'a Row, collection: &str, index: usize) -> Result<&'a [Value], IgError> {
    row.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| malformed(collection, index, "row is not an array"))
}

fn number_at(
    fields: &[Value],
    offset: usize,
    collection: &str,
    index: usize,
) -> Result<f64, IgError> {
    let value = fields
        .get(offset)
        .ok_or_else(|| malformed(collection, index, format!("missing field at offset {offset}")))?;
    value.as_f64().ok_or_else(|| {
        malformed(
            collection,
            index,
            format!("field at offset {offset} is not a number: {value}"),
        )
    })
}

fn vector_at(
    fields: &[Value],
    offset: usize,
    collection: &str,
    index: usize,
) -> Result<Point3, IgError> {
    let components = fields
        .get(offset)
        .and_then(Value::as_array)
        .filter(|c| c.len() >= 3)
        .ok_or_else(|| {
            malformed(
                collection,
                index,
                format!("field at offset {offset} is not a 3-vector"),
            )
        })?;

    let mut xyz = [0.0; 3];
    for (slot, value) in xyz.iter_mut().zip(components) {
        *slot = value.as_f64().ok_or_else(|| {
            malformed(
                collection,
                index,
                format!("non-numeric component in vector at offset {offset}: {value}"),
            )
        })?;
    }
    Ok(Point3::from(xyz))
}

impl TrackRecord {
    /// Read the track scalars from a row of the track collection.
    ///
    /// Arguments
    /// -----------------
    /// * `row` – The positional row.
    /// * `collection` – Collection name, used in error messages.
    /// * `index` – Row index, used in error messages.
    ///
    /// Return
    /// ----------
    /// * The record, or [`IgError::MalformedRecord`] if the row is too short or a
    ///   scalar is not numeric.
    pub fn from_row(row: &Row, collection: &str, index: usize) -> Result<Self, IgError> {
        let fields = row_fields(row, collection, index)?;
        let mut scalars = [0.0; TRACK_SCALAR_COUNT];
        for (i, slot) in scalars.iter_mut().enumerate() {
            *slot = number_at(fields, TRACK_PT_OFFSET + i, collection, index)?;
        }
        let [pt, phi, eta, charge, chi2, ndof] = scalars;
        Ok(TrackRecord {
            pt,
            phi,
            eta,
            charge,
            chi2,
            ndof,
        })
    }
}

impl ExtraRecord {
    /// Read both endpoints and both directions from a row of the extras collection.
    pub fn from_row(row: &Row, collection: &str, index: usize) -> Result<Self, IgError> {
        let fields = row_fields(row, collection, index)?;
        Ok(ExtraRecord {
            position1: vector_at(fields, EXTRA_POSITION1_OFFSET, collection, index)?,
            direction1: vector_at(fields, EXTRA_DIRECTION1_OFFSET, collection, index)?,
            position2: vector_at(fields, EXTRA_POSITION2_OFFSET, collection, index)?,
            direction2: vector_at(fields, EXTRA_DIRECTION2_OFFSET, collection, index)?,
        })
    }
}

impl AssociationLink {
    /// Read a `[[kind, track_index], [kind, extras_index]]` link record.
    ///
    /// The kind tags are ignored; indices must be non-negative integers that fit
    /// in `usize`.
    pub fn from_value(value: &Value, association: &str, index: usize) -> Result<Self, IgError> {
        let reference = |side: usize| -> Result<usize, IgError> {
            value
                .get(side)
                .and_then(|r| r.get(1))
                .and_then(Value::as_u64)
                .and_then(|i| usize::try_from(i).ok())
                .ok_or_else(|| {
                    malformed(
                        association,
                        index,
                        format!("reference {side} is not a [kind, index] pair: {value}"),
                    )
                })
        };

        Ok(AssociationLink {
            track_index: reference(0)?,
            extra_index: reference(1)?,
        })
    }
}
