//! # Export parameters
//!
//! [`ExportParams`] gathers the knobs of a batch run: where CSV files go, whether
//! archive members are merged into one output, how a failing document is handled
//! and which archive members are ignored. Build it with the validating
//! [`ExportParamsBuilder`]:
//!
//! ```rust
//! use igcurve::batch::params::{ErrorPolicy, ExportParams};
//!
//! let params = ExportParams::builder()
//!     .output_dir("out")
//!     .combine(true)
//!     .error_policy(ErrorPolicy::Skip)
//!     .build()
//!     .unwrap();
//! assert!(params.combine);
//! ```
use std::fmt;

use camino::Utf8PathBuf;

use crate::{
    constants::{ARCHIVE_HEADER_MEMBER, DEFAULT_OUTPUT_DIR},
    ig_errors::IgError,
};

/// What the driver does when one document of a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the batch at the first failing document; nothing is written.
    #[default]
    Abort,
    /// Log the failure, leave the document out and keep going.
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportParams {
    /// Directory receiving the CSV files, created if missing.
    pub output_dir: Utf8PathBuf,
    /// Merge the curves of every archive member into one output.
    pub combine: bool,
    pub error_policy: ErrorPolicy,
    /// Write a header-only file for outputs without curves instead of skipping them.
    pub write_empty: bool,
    /// Archive member names that are not events.
    pub excluded_members: Vec<String>,
}

impl ExportParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ExportParamsBuilder {
        ExportParamsBuilder::new()
    }
}

impl Default for ExportParams {
    fn default() -> Self {
        ExportParams {
            output_dir: Utf8PathBuf::from(DEFAULT_OUTPUT_DIR),
            combine: false,
            error_policy: ErrorPolicy::Abort,
            write_empty: false,
            excluded_members: vec![ARCHIVE_HEADER_MEMBER.to_string()],
        }
    }
}

/// Builder for [`ExportParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct ExportParamsBuilder {
    params: ExportParams,
}

impl ExportParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: ExportParams::default(),
        }
    }

    pub fn output_dir(mut self, v: impl Into<Utf8PathBuf>) -> Self {
        self.params.output_dir = v.into();
        self
    }
    pub fn combine(mut self, v: bool) -> Self {
        self.params.combine = v;
        self
    }
    pub fn error_policy(mut self, v: ErrorPolicy) -> Self {
        self.params.error_policy = v;
        self
    }
    pub fn write_empty(mut self, v: bool) -> Self {
        self.params.write_empty = v;
        self
    }
    /// Replace the excluded member list (the default holds `Header`).
    pub fn excluded_members<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.excluded_members = v.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and return the parameters.
    ///
    /// Return
    /// ----------
    /// * `Err(IgError::InvalidExportParameter)` if `output_dir` is empty or an
    ///   excluded member name is empty.
    pub fn build(self) -> Result<ExportParams, IgError> {
        let p = &self.params;

        if p.output_dir.as_str().trim().is_empty() {
            return Err(IgError::InvalidExportParameter(
                "output_dir must not be empty".into(),
            ));
        }
        if p.excluded_members.iter().any(|m| m.is_empty()) {
            return Err(IgError::InvalidExportParameter(
                "excluded member names must not be empty".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for ExportParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 40;
            writeln!(f, "Export Parameters")?;
            writeln!(f, "-----------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!("output_dir       = {}", self.output_dir, "CSV destination")?;
            line!("combine          = {}", self.combine, "Merge archive members")?;
            line!("error_policy     = {}", self.error_policy, "On document failure")?;
            line!("write_empty      = {}", self.write_empty, "Header-only files")?;
            line!(
                "excluded_members = {}",
                self.excluded_members.join(","),
                "Ignored archive members"
            )?;
            Ok(())
        } else {
            write!(
                f,
                "output_dir={}, combine={}, error_policy={}, write_empty={}, excluded_members=[{}]",
                self.output_dir,
                self.combine,
                self.error_policy,
                self.write_empty,
                self.excluded_members.join(",")
            )
        }
    }
}
