//! Error type definitions for group algebra operations

use thiserror::Error as ThisError;

/// Primary error type for group algebra operations
///
/// Every variant carries a static `context` naming the operation or type
/// that rejected its input. None of these are transient: retrying the same
/// call with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Group parameters were rejected while constructing an algebra
    #[error("{context}: invalid group parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A raw value or byte buffer is not a potential element of the group
    #[error("{context}: invalid element: {message}")]
    InvalidElement {
        context: &'static str,
        message: String,
    },

    /// A byte buffer does not have the length the codec requires
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A scalar violates the bound of a bounded multiplication
    #[error("{context}: invalid scalar: {message}")]
    InvalidScalar {
        context: &'static str,
        message: String,
    },

    /// A binary operation combined elements of different groups
    #[error("{context}: elements belong to different groups")]
    GroupMismatch { context: &'static str },

    /// Affine coordinates were requested from the point at infinity
    #[error("{context}: the point at infinity has no affine coordinates")]
    PointAtInfinity { context: &'static str },

    /// The injected randomness source failed
    #[error("{context}: random generation failed: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for group algebra operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidElement` error
    pub fn element(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidElement {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidScalar` error
    pub fn scalar(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidScalar {
            context,
            message: message.into(),
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::InvalidElement { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidScalar { context, .. }
            | Self::GroupMismatch { context }
            | Self::PointAtInfinity { context }
            | Self::RandomGeneration { context, .. } => context,
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidElement { message, .. } => Self::InvalidElement { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidScalar { message, .. } => Self::InvalidScalar { context, message },
            Self::GroupMismatch { .. } => Self::GroupMismatch { context },
            Self::PointAtInfinity { .. } => Self::PointAtInfinity { context },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
        }
    }

    /// Whether the caller broke a precondition of the operation
    ///
    /// Covers over-long scalars, cross-group operations and coordinate
    /// access on the point at infinity.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidScalar { .. } | Self::GroupMismatch { .. } | Self::PointAtInfinity { .. }
        )
    }
}
