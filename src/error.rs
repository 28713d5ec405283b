use thiserror::Error;

/// Errors raised when constructing the geometric primitives.
///
/// Table operations themselves cannot fail: a [`crate::Point`] or
/// [`crate::Rect`] that exists has already been validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was rejected at construction time.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
