/*! Mapping from [`ScreenError`] to Python exceptions. */

use autoscreen::ScreenError;
use pyo3::exceptions::{PyOSError, PyTypeError};
use pyo3::PyErr;

/// [`ScreenError`] on its way to Python.
///
/// - `InvalidArgument` raises `TypeError`, as argument parsing does.
/// - `PlatformQueryFailure` raises `OSError`.
#[derive(Debug)]
pub(crate) struct ScreenPyError(ScreenError);

impl From<ScreenError> for ScreenPyError {
  fn from(err: ScreenError) -> Self {
    Self(err)
  }
}

impl From<ScreenPyError> for PyErr {
  fn from(ScreenPyError(err): ScreenPyError) -> Self {
    let message = err.to_string();
    match err {
      ScreenError::InvalidArgument { .. } => PyTypeError::new_err(message),
      ScreenError::PlatformQueryFailure { .. } => PyOSError::new_err(message),
    }
  }
}
