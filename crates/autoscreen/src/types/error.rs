/*! Error types for screen queries. */

/// Errors that can occur while querying the main display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
  /// Wrong argument count or type at a call boundary.
  /// Raised before any platform interaction.
  #[error("Invalid argument: {reason}")]
  InvalidArgument { reason: String },

  /// The OS-level display query failed. Not retried.
  #[error("Main display query failed ({backend}): {reason}")]
  PlatformQueryFailure {
    backend: &'static str,
    reason: String,
  },
}

impl ScreenError {
  pub fn invalid_argument(reason: impl Into<String>) -> Self {
    Self::InvalidArgument {
      reason: reason.into(),
    }
  }

  pub fn platform(backend: &'static str, reason: impl Into<String>) -> Self {
    Self::PlatformQueryFailure {
      backend,
      reason: reason.into(),
    }
  }
}

/// Result type for screen queries.
pub type ScreenResult<T> = Result<T, ScreenError>;
