//! Media-index host-service contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Row projection returned by a media-index lookup.
///
/// Derivation only consumes the raw data path; the display name is carried
/// for diagnostics because hosts project both columns in one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MediaIndexRow {
    /// Raw filesystem data path column, when the index knows one.
    pub data_path: Option<String>,
    /// Human-readable display name column.
    pub display_name: Option<String>,
}

/// Failure classes a media-index adapter may report.
///
/// The resolver swallows every variant and treats it as "no result from this
/// strategy"; the taxonomy exists so adapters and logs stay precise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaIndexError {
    /// The host exposes no usable index service.
    #[error("media index unavailable")]
    Unavailable,
    /// The host denied the query for permission reasons.
    #[error("media index permission denied")]
    PermissionDenied,
    /// The index answered with a row the adapter could not interpret.
    #[error("malformed media index row: {reason}")]
    MalformedRow {
        /// Adapter-provided description of what failed to parse.
        reason: String,
    },
}

/// Host service answering media-index lookups keyed by resource identifier.
pub trait MediaIndexService {
    /// Queries the index for the row associated with `identifier`.
    ///
    /// Returns `Ok(None)` when the index has no row for the identifier. The
    /// row is returned by value, so the underlying query handle is released
    /// before the caller observes the result on success and failure alike.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaIndexError`] when the index cannot be queried.
    fn query_row(&self, identifier: &str) -> Result<Option<MediaIndexRow>, MediaIndexError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op media index for hosts without an index service.
pub struct NoopMediaIndex;

impl MediaIndexService for NoopMediaIndex {
    fn query_row(&self, _identifier: &str) -> Result<Option<MediaIndexRow>, MediaIndexError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory media index keyed by identifier, for tests and virtual hosts.
pub struct MemoryMediaIndex {
    rows: Rc<RefCell<HashMap<String, MediaIndexRow>>>,
}

impl MemoryMediaIndex {
    /// Inserts or replaces the row for `identifier`.
    pub fn insert(&self, identifier: impl Into<String>, row: MediaIndexRow) {
        self.rows.borrow_mut().insert(identifier.into(), row);
    }
}

impl MediaIndexService for MemoryMediaIndex {
    fn query_row(&self, identifier: &str) -> Result<Option<MediaIndexRow>, MediaIndexError> {
        Ok(self.rows.borrow().get(identifier).cloned())
    }
}
