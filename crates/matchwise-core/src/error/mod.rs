//! Unified error type for the matchwise core.
//!
//! All boundary operations (parsing, compilation, content loading,
//! profile deserialization) surface one of these variants. Internal
//! evaluation functions are total on validated inputs and never fail.

use thiserror::Error;


/// Kind of identifier involved in a duplicate-id collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A feature id in the feature table.
    Feature,
    /// A need id in the needs set.
    Need,
    /// A catalog object id.
    Object,
    /// A question variant id.
    Question,
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Feature => "feature",
            Self::Need => "need",
            Self::Object => "object",
            Self::Question => "question",
        };
        f.write_str(s)
    }
}

/// Top-level error type for the matchwise core.
///
/// Every variant corresponds to bad data introduced at a boundary
/// operation; the operation that first sees the bad data reports it.
///
/// # Examples
///
/// ```
/// use matchwise_core::error::{CoreError, IdKind};
///
/// let err = CoreError::Duplicate { kind: IdKind::Need, id: "active".into() };
/// assert_eq!(err.to_string(), "duplicate need id: active");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Formula string malformed.
    ///
    /// `position` is a byte offset into the formula source.
    #[error("parse error at {position}: {reason}")]
    Parse {
        /// Byte offset where the error was detected.
        position: usize,
        /// Human-readable reason.
        reason: String,
    },

    /// A formula literal references a feature absent from the table.
    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    /// A profile operation names a need not in the current needs set.
    #[error("unknown need: {0}")]
    UnknownNeed(String),

    /// A [0,1] invariant was violated on input.
    #[error("value out of range for {field}: {value}")]
    ValueOutOfRange {
        /// Which field carried the offending value.
        field: String,
        /// The offending value.
        value: f32,
    },

    /// An external document does not match the expected shape.
    #[error("schema error at {path}: {reason}")]
    Schema {
        /// JSON-pointer-ish location of the mismatch.
        path: String,
        /// Human-readable reason.
        reason: String,
    },

    /// Two features, needs, objects, or questions share an id.
    #[error("duplicate {kind} id: {id}")]
    Duplicate {
        /// What namespace the collision happened in.
        kind: IdKind,
        /// The colliding id.
        id: String,
    },
}

impl CoreError {
    /// Create a parse error.
    #[inline]
    pub fn parse(position: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            position,
            reason: reason.into(),
        }
    }

    /// Create a schema error.
    #[inline]
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a value-out-of-range error.
    #[inline]
    pub fn out_of_range(field: impl Into<String>, value: f32) -> Self {
        Self::ValueOutOfRange {
            field: field.into(),
            value,
        }
    }

    /// Create a duplicate-id error.
    #[inline]
    pub fn duplicate(kind: IdKind, id: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias for matchwise core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
