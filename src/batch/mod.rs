//! # Batches of events
//!
//! Everything around the decode-and-derive core: choosing the source from the
//! input path, reading archive members, collating per-member curves into output
//! units and writing them.
//!
//! Modules
//! -----------------
//! * [`source`](crate::batch::source) – [`EventSource`](crate::batch::source::EventSource)
//!   selection by extension and output naming.
//! * [`archive`](crate::batch::archive) – Zip member extraction (`Header` and directories skipped).
//! * [`params`](crate::batch::params) – [`ExportParams`](crate::batch::params::ExportParams) and its builder.
//! * [`driver`](crate::batch::driver) – Per-document pipeline, collation, export.
//! * *(crate-private)* `progress_bar` – Optional progress UI (feature `progress`).
//!
//! Documents are processed one after the other; each run touches no shared
//! state, and units are always emitted in source-member order.
pub mod archive;
pub mod driver;
pub mod params;
pub(crate) mod progress_bar;
pub mod source;
