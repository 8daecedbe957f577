//! Event sources and output naming.
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;

use crate::{
    batch::archive::read_archive_members,
    constants::{ARCHIVE_EVENTS_SEGMENT, ARCHIVE_EXTENSION, DOCUMENT_EXTENSION},
    ig_errors::IgError,
};

/// Raw bytes of one event, with the name it came under.
///
/// Bytes are kept undecoded until the member is processed, so a member that is
/// not UTF-8 fails on its own instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMember {
    /// File name for a single document, member path for an archive.
    pub name: String,
    pub raw: Vec<u8>,
}

impl EventMember {
    pub fn new(name: impl Into<String>, raw: impl Into<Vec<u8>>) -> Self {
        EventMember {
            name: name.into(),
            raw: raw.into(),
        }
    }

    /// The member as text.
    ///
    /// Return
    /// ----------
    /// * The UTF-8 text, or [`IgError::MalformedDocument`] naming the first
    ///   invalid byte.
    pub fn text(&self) -> Result<&str, IgError> {
        std::str::from_utf8(&self.raw)
            .map_err(|e| IgError::MalformedDocument(format!("event is not valid UTF-8: {e}")))
    }
}

/// Where the events of a batch come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// One event document (`.json` or no extension).
    Document(Utf8PathBuf),
    /// A zip archive of event documents (`.ig`).
    Archive(Utf8PathBuf),
}

impl EventSource {
    /// Select the source kind from the file extension.
    ///
    /// Arguments
    /// -----------------
    /// * `path` – Input file. It is not opened here.
    ///
    /// Return
    /// ----------
    /// * [`EventSource::Archive`] for `.ig`, [`EventSource::Document`] for `.json` or
    ///   no extension, otherwise [`IgError::UnsupportedExtension`].
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Result<Self, IgError> {
        let path = path.into();
        match path.extension() {
            Some(ARCHIVE_EXTENSION) => Ok(EventSource::Archive(path)),
            Some(DOCUMENT_EXTENSION) | None => Ok(EventSource::Document(path)),
            Some(other) => Err(IgError::UnsupportedExtension(format!(".{other}"))),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        match self {
            EventSource::Document(path) | EventSource::Archive(path) => path,
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, EventSource::Archive(_))
    }

    /// File name of the source, extension included.
    pub fn file_name(&self) -> &str {
        self.path().file_name().unwrap_or(self.path().as_str())
    }

    /// Load the events of this source.
    ///
    /// A document yields one member named after its file; an archive yields its
    /// members in archive order, minus directories and `excluded` names.
    pub fn read_members(&self, excluded: &[String]) -> Result<Vec<EventMember>, IgError> {
        match self {
            EventSource::Document(path) => Ok(vec![EventMember::new(
                self.file_name(),
                fs::read(path)?,
            )]),
            EventSource::Archive(path) => read_archive_members(path, excluded),
        }
    }

    /// Output stem of the unit built from one member.
    ///
    /// * document `Event_1.json` → `Event_1.json`
    /// * archive `Zee_0.ig`, member `Events/Run_1/Event_2` → `Zee_0-Run_1-Event_2`
    pub fn member_output_stem(&self, member_name: &str) -> String {
        match self {
            EventSource::Document(_) => self.file_name().to_string(),
            EventSource::Archive(_) => {
                let archive = self.file_name();
                let stem = archive
                    .strip_suffix(&format!(".{ARCHIVE_EXTENSION}"))
                    .unwrap_or(archive);
                let tail = member_name
                    .split('/')
                    .filter(|segment| *segment != ARCHIVE_EVENTS_SEGMENT)
                    .join("-");
                format!("{stem}-{tail}")
            }
        }
    }

    /// Output stem of the single unit built in combine mode.
    pub fn combined_output_stem(&self) -> String {
        self.file_name().to_string()
    }
}
