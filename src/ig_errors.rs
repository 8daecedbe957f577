use std::fmt;

use thiserror::Error;

/// Which side of an association link pointed outside its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Track,
    Extra,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Track => write!(f, "track"),
            RecordKind::Extra => write!(f, "extras"),
        }
    }
}

/// Stage of the decode-and-derive pipeline where a document failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Dialect normalization followed by JSON parsing.
    Parse,
    /// Lookup of the track, extras and association sections.
    Resolve,
    /// Per-link curve construction.
    Build,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Parse => write!(f, "parse"),
            PipelineStage::Resolve => write!(f, "resolve"),
            PipelineStage::Build => write!(f, "build"),
        }
    }
}

#[derive(Error, Debug)]
pub enum IgError {
    #[error("Malformed event document: {0}")]
    MalformedDocument(String),

    #[error("Track data in Collections doesn't exist")]
    MissingTrackCollection,

    #[error("Extras data in Collections doesn't exist")]
    MissingExtrasCollection,

    #[error("Extras data in Associations doesn't exist")]
    MissingAssociations,

    #[error("Association {link} references {kind} index {index}, but only {len} records exist")]
    IndexOutOfRange {
        link: usize,
        kind: RecordKind,
        index: usize,
        len: usize,
    },

    #[error("Malformed record {index} in {collection}: {reason}")]
    MalformedRecord {
        collection: String,
        index: usize,
        reason: String,
    },

    #[error("Unrecognized input format: {0:?}")]
    UnsupportedExtension(String),

    #[error("Event archive is empty: {0}")]
    EmptyArchive(String),

    #[error("Invalid export parameter: {0}")]
    InvalidExportParameter(String),

    #[error("No curves were built for {0}")]
    NoCurves(String),

    #[error("{document}: {stage} stage failed: {source}")]
    Document {
        document: String,
        stage: PipelineStage,
        #[source]
        source: Box<IgError>,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV writer error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Event archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),
}

impl IgError {
    /// Pipeline stage a core error belongs to, `None` for I/O and driver errors.
    pub fn stage(&self) -> Option<PipelineStage> {
        use IgError::*;
        match self {
            MalformedDocument(_) => Some(PipelineStage::Parse),
            MissingTrackCollection | MissingExtrasCollection | MissingAssociations => {
                Some(PipelineStage::Resolve)
            }
            IndexOutOfRange { .. } | MalformedRecord { .. } => Some(PipelineStage::Build),
            Document { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Attach a document identifier to a core error.
    ///
    /// Errors that are already attached to a document are returned untouched.
    pub fn in_document(self, document: impl Into<String>) -> Self {
        match self {
            IgError::Document { .. } => self,
            other => {
                let stage = other.stage().unwrap_or(PipelineStage::Parse);
                IgError::Document {
                    document: document.into(),
                    stage,
                    source: Box::new(other),
                }
            }
        }
    }

    /// Innermost error, unwrapping any document context.
    pub fn root(&self) -> &IgError {
        match self {
            IgError::Document { source, .. } => source.root(),
            other => other,
        }
    }
}

impl PartialEq for IgError {
    fn eq(&self, other: &Self) -> bool {
        use IgError::*;
        match (self, other) {
            (MalformedDocument(a), MalformedDocument(b)) => a == b,
            (MissingTrackCollection, MissingTrackCollection) => true,
            (MissingExtrasCollection, MissingExtrasCollection) => true,
            (MissingAssociations, MissingAssociations) => true,
            (
                IndexOutOfRange {
                    link: l1,
                    kind: k1,
                    index: i1,
                    len: n1,
                },
                IndexOutOfRange {
                    link: l2,
                    kind: k2,
                    index: i2,
                    len: n2,
                },
            ) => l1 == l2 && k1 == k2 && i1 == i2 && n1 == n2,
            (
                MalformedRecord {
                    collection: c1,
                    index: i1,
                    reason: r1,
                },
                MalformedRecord {
                    collection: c2,
                    index: i2,
                    reason: r2,
                },
            ) => c1 == c2 && i1 == i2 && r1 == r2,
            (UnsupportedExtension(a), UnsupportedExtension(b)) => a == b,
            (EmptyArchive(a), EmptyArchive(b)) => a == b,
            (InvalidExportParameter(a), InvalidExportParameter(b)) => a == b,
            (NoCurves(a), NoCurves(b)) => a == b,
            (
                Document {
                    document: d1,
                    stage: s1,
                    source: e1,
                },
                Document {
                    document: d2,
                    stage: s2,
                    source: e2,
                },
            ) => d1 == d2 && s1 == s2 && e1 == e2,

            // foreign errors are not comparable, same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (ArchiveError(_), ArchiveError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod ig_errors_test {
    use super::*;

    #[test]
    fn test_stage_of_core_errors() {
        assert_eq!(
            IgError::MalformedDocument("eof".into()).stage(),
            Some(PipelineStage::Parse)
        );
        assert_eq!(
            IgError::MissingAssociations.stage(),
            Some(PipelineStage::Resolve)
        );
        assert_eq!(
            IgError::IndexOutOfRange {
                link: 0,
                kind: RecordKind::Track,
                index: 3,
                len: 1
            }
            .stage(),
            Some(PipelineStage::Build)
        );
        assert_eq!(IgError::EmptyArchive("a.ig".into()).stage(), None);
    }

    #[test]
    fn test_in_document_wraps_once() {
        let err = IgError::MissingTrackCollection
            .in_document("Event_1")
            .in_document("ignored");

        match &err {
            IgError::Document {
                document, stage, ..
            } => {
                assert_eq!(document, "Event_1");
                assert_eq!(*stage, PipelineStage::Resolve);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.root(), &IgError::MissingTrackCollection);
        assert_eq!(
            err.to_string(),
            "Event_1: resolve stage failed: Track data in Collections doesn't exist"
        );
    }
}
