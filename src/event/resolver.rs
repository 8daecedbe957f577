//! # Track / extras / association resolution
//!
//! Locates, inside a parsed [`EventDocument`], the three sections the curve
//! builder needs:
//!
//! 1. the **track collection**, the first collection (in file order) whose name is
//!    one of [`TRACK_COLLECTION_NAMES`],
//! 2. the **extras collection** [`EXTRAS_COLLECTION_NAME`],
//! 3. the **association table** [`TRACK_EXTRAS_ASSOCIATION_NAME`].
//!
//! The track aliases are successive schema versions with the same layout at the
//! offsets read downstream; no per-version mapping is applied.
//!
//! Link indices are **not** bounds-checked here, that is the curve builder's job.
use serde_json::Value;
use tracing::info;

use crate::{
    constants::{
        Row, EXTRAS_COLLECTION_NAME, TRACK_COLLECTION_NAMES, TRACK_EXTRAS_ASSOCIATION_NAME,
    },
    event::{document::EventDocument, records::AssociationLink},
    ig_errors::IgError,
};

/// The sections of one document that feed the curve builder.
///
/// Rows are borrowed from the document; only the links are decoded eagerly.
#[derive(Debug, Clone)]
pub struct ResolvedEvent<'a> {
    /// Name of the track collection that matched.
    pub track_collection: &'a str,
    pub tracks: &'a [Row],
    pub extras: &'a [Row],
    pub links: Vec<AssociationLink>,
}

/// Pick the first collection of `doc` whose name is a known track alias.
fn find_track_collection(doc: &EventDocument) -> Option<(&str, &[Row])> {
    doc.collections
        .iter()
        .find(|(name, _)| TRACK_COLLECTION_NAMES.contains(&name.as_str()))
        .map(|(name, rows)| (name.as_str(), rows.as_slice()))
}

/// Resolve the track, extras and association sections of a document.
///
/// Arguments
/// -----------------
/// * `doc` – A parsed event document.
///
/// Return
/// ----------
/// * A [`ResolvedEvent`] borrowing from `doc`, or one of
///   [`IgError::MissingTrackCollection`], [`IgError::MissingExtrasCollection`],
///   [`IgError::MissingAssociations`] (checked in that order), or
///   [`IgError::MalformedRecord`] if a link is not a pair of `[kind, index]`.
pub fn resolve(doc: &EventDocument) -> Result<ResolvedEvent<'_>, IgError> {
    let (track_collection, tracks) =
        find_track_collection(doc).ok_or(IgError::MissingTrackCollection)?;
    info!("{} tracks found.", tracks.len());

    let extras = doc
        .collection(EXTRAS_COLLECTION_NAME)
        .ok_or(IgError::MissingExtrasCollection)?;
    info!("{} extras found.", extras.len());

    let raw_links: &[Value] = doc
        .association(TRACK_EXTRAS_ASSOCIATION_NAME)
        .ok_or(IgError::MissingAssociations)?;
    info!("{} associations found.", raw_links.len());

    let links = raw_links
        .iter()
        .enumerate()
        .map(|(i, link)| AssociationLink::from_value(link, TRACK_EXTRAS_ASSOCIATION_NAME, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedEvent {
        track_collection,
        tracks,
        extras,
        links,
    })
}

#[cfg(test)]
mod resolver_test {
    use super::*;
    use crate::event::document::parse_document;

    #[test]
    fn test_resolve_first_alias_in_file_order() {
        let doc = parse_document(
            r#"{
                "Collections": {
                    "Tracks_V3": [[0, 0, 1, 2, 3, 4, 5, 6]],
                    "Tracks_V1": [],
                    "Extras_V1": [],
                    "Other": []
                },
                "Associations": {"TrackExtras_V1": [[[1, 0], [2, 0]]]}
            }"#,
        )
        .unwrap();

        let resolved = resolve(&doc).unwrap();
        assert_eq!(resolved.track_collection, "Tracks_V3");
        assert_eq!(resolved.tracks.len(), 1);
        assert!(resolved.extras.is_empty());
        assert_eq!(
            resolved.links,
            vec![AssociationLink {
                track_index: 0,
                extra_index: 0
            }]
        );
    }

    #[test]
    fn test_resolve_missing_sections() {
        let no_tracks = parse_document(
            r#"{"Collections": {"Tracks_V9": [], "Extras_V1": []},
                "Associations": {"TrackExtras_V1": []}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve(&no_tracks).unwrap_err(),
            IgError::MissingTrackCollection
        );

        let no_extras = parse_document(
            r#"{"Collections": {"Tracks_V2": []}, "Associations": {"TrackExtras_V1": []}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve(&no_extras).unwrap_err(),
            IgError::MissingExtrasCollection
        );

        let no_assoc =
            parse_document(r#"{"Collections": {"Tracks_V2": [], "Extras_V1": []}}"#).unwrap();
        assert_eq!(resolve(&no_assoc).unwrap_err(), IgError::MissingAssociations);
    }

    #[test]
    fn test_resolve_does_not_check_bounds() {
        let doc = parse_document(
            r#"{"Collections": {"Tracks_V1": [], "Extras_V1": []},
                "Associations": {"TrackExtras_V1": [[[1, 42], [2, 7]]]}}"#,
        )
        .unwrap();
        let resolved = resolve(&doc).unwrap();
        assert_eq!(resolved.links[0].track_index, 42);
        assert_eq!(resolved.links[0].extra_index, 7);
    }
}
