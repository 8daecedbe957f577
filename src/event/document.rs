//! # Event documents
//!
//! Typed in-memory view of one iSpy event: the `Types`, `Collections` and
//! `Associations` sections, each kept in **file order** so that the first
//! matching track alias can be chosen deterministically.
//!
//! Rows are kept in their positional layout ([`Row`]); the named accessors live
//! in [`records`](crate::event::records) and are applied lazily by the resolver
//! and the curve builder.
use serde::Deserialize;
use serde_json::Value;

use crate::{
    constants::{Row, Section},
    event::dialect::normalize,
    ig_errors::IgError,
};

/// One parsed event.
///
/// Missing top-level sections deserialize as empty maps; a top level that is not
/// a JSON object is rejected by [`parse_document`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDocument {
    /// Schema descriptors, opaque to this crate.
    #[serde(rename = "Types", default)]
    pub types: Section<Value>,

    /// Collection name → ordered rows.
    #[serde(rename = "Collections", default)]
    pub collections: Section<Vec<Row>>,

    /// Association name → ordered link records.
    #[serde(rename = "Associations", default)]
    pub associations: Section<Vec<Value>>,
}

impl EventDocument {
    /// Rows of a collection, if present.
    pub fn collection(&self, name: &str) -> Option<&[Row]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Link records of an association table, if present.
    pub fn association(&self, name: &str) -> Option<&[Value]> {
        self.associations.get(name).map(Vec::as_slice)
    }
}

/// Parse strict JSON text into an [`EventDocument`].
///
/// Arguments
/// -----------------
/// * `normalized` – Text already passed through [`normalize`].
///
/// Return
/// ----------
/// * The document, or [`IgError::MalformedDocument`] when the text is not valid
///   JSON, the top level is not an object, or a section has the wrong shape.
pub fn parse_document(normalized: &str) -> Result<EventDocument, IgError> {
    let malformed = |e: serde_json::Error| IgError::MalformedDocument(e.to_string());

    // sequences also deserialize into the derived struct
    let value: Value = serde_json::from_str(normalized).map_err(malformed)?;
    if !value.is_object() {
        return Err(IgError::MalformedDocument(
            "top level is not an object".into(),
        ));
    }
    serde_json::from_value(value).map_err(malformed)
}

/// Normalize the event dialect then parse the result.
pub fn decode_document(raw: &str) -> Result<EventDocument, IgError> {
    parse_document(&normalize(raw))
}

#[cfg(test)]
mod document_test {
    use super::*;

    #[test]
    fn test_parse_keeps_section_order() {
        let doc = parse_document(
            r#"{
                "Types": {"Tracks_V2": [["pos", "v3d"]]},
                "Collections": {"Zeta": [], "Tracks_V2": [[0, 1]], "Alpha": []},
                "Associations": {"TrackExtras_V1": [[[1, 0], [2, 0]]]}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = doc.collections.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zeta", "Tracks_V2", "Alpha"]);
        assert_eq!(doc.collection("Tracks_V2").map(<[Row]>::len), Some(1));
        assert_eq!(doc.association("TrackExtras_V1").map(<[Value]>::len), Some(1));
        assert!(doc.types.contains_key("Tracks_V2"));
    }

    #[test]
    fn test_parse_missing_sections_are_empty() {
        let doc = parse_document("{}").unwrap();
        assert!(doc.types.is_empty());
        assert!(doc.collections.is_empty());
        assert!(doc.associations.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_top_level() {
        for text in ["[]", "[{}]", "[{}, {}, {}]", "[1, 2, 3]", "42", "null", "\"Events\""] {
            assert_eq!(
                parse_document(text).unwrap_err(),
                IgError::MalformedDocument("top level is not an object".into()),
                "{text}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_tuple_top_level() {
        let err = decode_document("({'Collections': {}}, {})").unwrap_err();
        assert_eq!(
            err,
            IgError::MalformedDocument("top level is not an object".into())
        );
        assert_eq!(err.stage(), Some(crate::ig_errors::PipelineStage::Parse));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_document("{'Collections': {}}"),
            Err(IgError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_decode_accepts_dialect() {
        let doc =
            decode_document("{'Collections': {'Extras_V1': [((0, 0, nan), (1, 2, 3))]}}").unwrap();
        let rows = doc.collection("Extras_V1").unwrap();
        assert_eq!(rows[0], serde_json::json!([[0, 0, 0], [1, 2, 3]]));
    }
}
