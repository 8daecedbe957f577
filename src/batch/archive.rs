//! Reading event archives (`.ig` files are plain zip containers).
use std::{
    fs,
    io::{self, Read, Seek},
};

use camino::Utf8Path;
use tracing::debug;

use crate::{batch::source::EventMember, ig_errors::IgError};

/// Upper bound on the buffer reserved from a member's declared size.
const MEMBER_PREALLOC_LIMIT: u64 = 64 << 20;

/// Read every event member of an archive file.
///
/// See [`read_archive_members_from`] for the filtering rules.
pub fn read_archive_members(
    path: &Utf8Path,
    excluded: &[String],
) -> Result<Vec<EventMember>, IgError> {
    let file = fs::File::open(path)?;
    read_archive_members_from(io::BufReader::new(file), path.as_str(), excluded)
}

/// Read every event member of an archive from any seekable reader.
///
/// Arguments
/// -----------------
/// * `reader` – The zip container.
/// * `label` – Name of the archive, used in errors.
/// * `excluded` – Member names to skip (compared against the full member path).
///
/// Return
/// ----------
/// * The members in archive order, directories and excluded names removed, or
///   [`IgError::EmptyArchive`] if none remain.
pub fn read_archive_members_from<R: Read + Seek>(
    reader: R,
    label: &str,
    excluded: &[String],
) -> Result<Vec<EventMember>, IgError> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut members = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        if excluded.iter().any(|e| *e == name) {
            debug!("skipping archive member {name}");
            continue;
        }

        // declared sizes are untrusted
        let mut raw = Vec::with_capacity(entry.size().min(MEMBER_PREALLOC_LIMIT) as usize);
        entry.read_to_end(&mut raw)?;
        members.push(EventMember { name, raw });
    }

    if members.is_empty() {
        return Err(IgError::EmptyArchive(label.to_string()));
    }
    Ok(members)
}
