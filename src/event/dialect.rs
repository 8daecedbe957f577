//! # Event dialect normalization
//!
//! Legacy iSpy producers write event files as Python literals rather than strict
//! JSON: tuples use parentheses, strings use single quotes and missing values are
//! written as a bare `nan`. [`normalize`] rewrites that dialect into text that a
//! strict JSON parser accepts.
//!
//! ## Substitutions
//! -----------------
//! Applied in this fixed order, unconditionally:
//!
//! 1. `(` → `[`
//! 2. `)` → `]`
//! 3. `'` → `"`
//! 4. the token `nan` → `0`
//!
//! The `nan` rule only matches the bare token (word boundaries on both sides), so
//! identifiers that merely contain the letters, such as `nanoseconds`, are kept.
//!
//! ## Properties
//! -----------------
//! * **Total** – any input yields a string; validity is checked by the parser.
//! * **Idempotent** – every target is eliminated and none is reintroduced, so
//!   `normalize(normalize(s)) == normalize(s)`.
//! * **Identity on clean JSON** – text without any target is returned unchanged.
//!
//! ## See also
//! ------------
//! * [`parse_document`](crate::event::document::parse_document) – Strict parsing of the normalized text.
use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static NAN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnan\b").expect("nan token regex is valid"));

/// Rewrite the Python-literal event dialect into strict JSON text.
///
/// Arguments
/// -----------------
/// * `text` – Raw event file contents.
///
/// Return
/// ----------
/// * The normalized text. Borrowed when nothing had to change.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let needs_brackets = text.contains(['(', ')', '\'']);
    let bracketed: Cow<'_, str> = if needs_brackets {
        Cow::Owned(
            text.chars()
                .map(|c| match c {
                    '(' => '[',
                    ')' => ']',
                    '\'' => '"',
                    other => other,
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    };

    match NAN_TOKEN.replace_all(&bracketed, "0") {
        Cow::Borrowed(_) => bracketed,
        Cow::Owned(replaced) => Cow::Owned(replaced),
    }
}
