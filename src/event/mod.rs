//! # Event decoding
//!
//! Turns the raw text of one iSpy event into the typed sections consumed by the
//! curve builder.
//!
//! Modules
//! -----------------
//! * [`dialect`](crate::event::dialect) – Python-literal dialect → strict JSON text.
//! * [`document`](crate::event::document) – [`EventDocument`](crate::event::document::EventDocument)
//!   with the `Types`, `Collections` and `Associations` sections in file order.
//! * [`records`](crate::event::records) – Named views over positional track, extras and link rows.
//! * [`resolver`](crate::event::resolver) – Finds the track, extras and association sections.
//!
//! Data flow
//! -----------------
//! ```text
//! raw text ─normalize─▶ JSON text ─parse_document─▶ EventDocument ─resolve─▶ ResolvedEvent
//! ```
//!
//! Every step is a pure function of in-memory data; none performs I/O.
pub mod dialect;
pub mod document;
pub mod records;
pub mod resolver;
