//! Domain error model.

use thiserror::Error;

/// An identifier that is not a valid record id for the storage backend.
///
/// Carries the offending input; one handler echoes the formatted message in
/// its error response, the rest only log it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid record id: {0:?}")]
pub struct InvalidRecordId(pub String);
