//! Region patcher - idempotent entry injection into delimited text regions
//!
//! Treats a document as opaque text. A region is located by a start/end
//! marker pair (first start marker, then the first end marker after it),
//! optionally narrowed again by further marker pairs. If the entry is not
//! already inside the innermost region it is appended after the last
//! separator, using the indentation of the first existing entry, and the
//! modified region is spliced back outward.
//!
//! Text outside the region is never touched and the patch never panics on
//! unexpected input: missing markers come back as [`PatchOutcome::Skipped`].
//!
//! # Example
//!
//! ```
//! use spaify::patch::{self, Markers, PatchOutcome, PatchRequest};
//!
//! let kernel = "$groups = [\n    'web' => [\n        \\A::class,\n    ],\n];";
//! let request = PatchRequest::new("\\B::class", Markers::new("$groups = [", "];"))
//!     .within(Markers::new("'web' => [", "],"));
//!
//! let PatchOutcome::Patched(patched) = patch::patch(kernel, &request) else {
//!     panic!("expected a patch");
//! };
//! assert!(patched.contains("\\A::class,\n        \\B::class,\n"));
//!
//! // Running again is a no-op
//! assert_eq!(patch::patch(&patched, &request), PatchOutcome::AlreadyPresent);
//! ```

mod internal;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use internal::{
    contains_entry, detect_indentation, extract_region, insert_entry, splice_region,
};

/// Default item separator between entries
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default token that every entry starts with (PHP class references)
pub const DEFAULT_ENTRY_TOKEN: &str = "\\";

/// Why a region could not be patched
///
/// None of these are fatal; the caller decides whether to warn or stop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegionError {
    /// A start or end marker does not occur where it was searched for
    #[error("marker not found: {marker:?}")]
    MarkerNotFound { marker: String },

    /// The end marker only occurs before the start marker
    #[error("region malformed: {end:?} does not follow {start:?}")]
    RegionMalformed { start: String, end: String },

    /// The region has no existing entry to take indentation from
    #[error("no existing entry starting with {token:?} in region")]
    NoExistingEntry { token: String },

    /// The region has no separator to insert after
    #[error("no {separator:?} separator in region")]
    NoSeparator { separator: String },
}

/// A start/end delimiter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// What to insert, and where
///
/// The region path always holds at least one marker pair. Each further pair
/// is searched inside the region found by the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRequest {
    path: Vec<Markers>,
    entry: String,
    separator: String,
    token: String,
}

impl PatchRequest {
    pub fn new(entry: impl Into<String>, markers: Markers) -> Self {
        Self {
            path: vec![markers],
            entry: entry.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            token: DEFAULT_ENTRY_TOKEN.to_string(),
        }
    }

    /// Build a request from a full region path, outermost first
    ///
    /// Returns `None` for an empty path.
    pub fn from_path(entry: impl Into<String>, path: Vec<Markers>) -> Option<Self> {
        let mut markers = path.into_iter();
        let first = markers.next()?;
        Some(markers.fold(Self::new(entry, first), Self::within))
    }

    /// Narrow the target region with another marker pair
    pub fn within(mut self, markers: Markers) -> Self {
        self.path.push(markers);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Token marking the start of an entry, used for indentation detection
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn path(&self) -> &[Markers] {
        &self.path
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }
}

/// Result of a patch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The entry was inserted; holds the new document
    Patched(String),
    /// The entry was already in the region, nothing to do
    AlreadyPresent,
    /// The document did not have the expected shape
    Skipped(RegionError),
}

impl PatchOutcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, PatchOutcome::Patched(_))
    }

    /// The patched document, or `original` unchanged
    pub fn into_document(self, original: &str) -> String {
        match self {
            PatchOutcome::Patched(document) => document,
            PatchOutcome::AlreadyPresent | PatchOutcome::Skipped(_) => original.to_string(),
        }
    }
}

/// Insert the requested entry into its region, unless already present
pub fn patch(document: &str, request: &PatchRequest) -> PatchOutcome {
    internal::patch(document, request)
}
