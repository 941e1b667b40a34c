/// Convenience result type used across the crate.
pub type ResizeResult<T> = Result<T, ResizeError>;

/// Top-level error taxonomy for kernel-table construction and lookup.
///
/// Every variant except [`ResizeError::Other`] is a precondition violation: the
/// inputs can never produce a correct table, so construction stops instead of
/// returning a partially valid one.
#[derive(thiserror::Error, Debug)]
pub enum ResizeError {
    /// Invalid caller-provided sizes, parameters or indices.
    #[error("validation error: {0}")]
    Validation(String),

    /// Sampling geometry that cannot be tiled as requested (bad period or corner interval).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Filter produced weights that cannot be normalized.
    #[error("filter error: {0}")]
    Filter(String),

    /// Errors while parsing or validating axis configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResizeError {
    /// Build a [`ResizeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ResizeError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ResizeError::Filter`] value.
    pub fn filter(msg: impl Into<String>) -> Self {
        Self::Filter(msg.into())
    }

    /// Build a [`ResizeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
