//! # Constants and type definitions for igcurve
//!
//! This module centralizes the **well-known names** of the event format, the
//! **fixed record offsets** read by the decoder, the **curve heuristic** and the
//! **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Collection and association names recognized in an event document
//! - Positional offsets of the fields inside track and extras rows
//! - The Bezier handle scale factor
//! - Defaults of the batch driver (output directory, excluded archive members)

use indexmap::IndexMap;
use nalgebra::Vector3;
use serde_json::Value;

// -------------------------------------------------------------------------------------------------
// Event format names
// -------------------------------------------------------------------------------------------------

/// Track collection aliases, in preference order.
///
/// The three versions share the field layout at the offsets read by
/// [`TrackRecord`](crate::event::records::TrackRecord).
pub const TRACK_COLLECTION_NAMES: [&str; 3] = ["Tracks_V1", "Tracks_V2", "Tracks_V3"];

/// Name of the collection holding the track endpoints and directions
pub const EXTRAS_COLLECTION_NAME: &str = "Extras_V1";

/// Name of the association table linking tracks to extras
pub const TRACK_EXTRAS_ASSOCIATION_NAME: &str = "TrackExtras_V1";

/// Archive member holding run metadata rather than an event
pub const ARCHIVE_HEADER_MEMBER: &str = "Header";

/// Path segment of archive members that is dropped when naming outputs
pub const ARCHIVE_EVENTS_SEGMENT: &str = "Events";

// -------------------------------------------------------------------------------------------------
// Record layout
// -------------------------------------------------------------------------------------------------

/// Offset of `pt` in a track row; `phi`, `eta`, `charge`, `chi2`, `ndof` follow.
pub const TRACK_PT_OFFSET: usize = 2;

/// Number of scalar fields read from a track row
pub const TRACK_SCALAR_COUNT: usize = 6;

/// Offsets of `position1`, `direction1`, `position2`, `direction2` in an extras row
pub const EXTRA_POSITION1_OFFSET: usize = 0;
pub const EXTRA_DIRECTION1_OFFSET: usize = 1;
pub const EXTRA_POSITION2_OFFSET: usize = 2;
pub const EXTRA_DIRECTION2_OFFSET: usize = 3;

// -------------------------------------------------------------------------------------------------
// Curve construction
// -------------------------------------------------------------------------------------------------

/// Fraction of the endpoint distance used as the Bezier handle length.
///
/// Approximates the NURBS track rendering of the iSpy event display; it does not
/// reproduce it exactly.
pub const BEZIER_HANDLE_SCALE: f64 = 0.25;

// -------------------------------------------------------------------------------------------------
// Batch defaults
// -------------------------------------------------------------------------------------------------

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "ig-to-csv-output";

/// Extension of event archives
pub const ARCHIVE_EXTENSION: &str = "ig";

/// Extension of single event documents (files without extension are accepted too)
pub const DOCUMENT_EXTENSION: &str = "json";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// A 3D point or direction, in the detector frame
pub type Point3 = Vector3<f64>;

/// One row of a collection, kept in its positional (tuple) layout
pub type Row = Value;

/// A named section of the document, in file order
pub type Section<T> = IndexMap<String, T>;
