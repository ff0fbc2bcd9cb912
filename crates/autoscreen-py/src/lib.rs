/*!
Python `screen` module.

Exports the main display queries of [`autoscreen`] as module functions:

```python
from autoscreen import screen

width, height = screen.get_size()
screen.point_visible(0, 0)        # True
screen.point_visible(width, 0)    # False
screen.point_visible(-1, 0)       # False
screen.point_visible(1.5, 0)      # TypeError
```
*/

#![allow(unsafe_code)]

mod errors;

use std::sync::OnceLock;

use autoscreen::{Screen, ScreenError};
use pyo3::prelude::*;
use pyo3::exceptions::PyOverflowError;

use crate::errors::ScreenPyError;

const LOG_ENV: &str = "AUTOSCREEN_LOG";

fn default_screen() -> &'static Screen {
  static SCREEN: OnceLock<Screen> = OnceLock::new();
  SCREEN.get_or_init(Screen::new)
}

/// Read an integer coordinate argument.
///
/// Accepts `int` and anything implementing `__index__`. `None` means the
/// value is an integer too large for any display.
fn coordinate(value: &Bound<'_, PyAny>, name: &str) -> Result<Option<i64>, ScreenPyError> {
  match value.extract::<i64>() {
    Ok(v) => Ok(Some(v)),
    Err(err) if err.is_instance_of::<PyOverflowError>(value.py()) => Ok(None),
    Err(_) => {
      let type_name = value
        .get_type()
        .name()
        .map_or_else(|_| "object".to_owned(), |n| n.to_string());
      let reason = format!("{name} must be an integer, not {type_name}");
      Err(ScreenError::invalid_argument(reason).into())
    }
  }
}

/// get_size() -> tuple (width, height)
///
/// Returns a tuple (width, height) of the size of the main screen.
#[pyfunction]
fn get_size(py: Python<'_>) -> PyResult<(u32, u32)> {
  let size = py
    .allow_threads(|| default_screen().get_size())
    .map_err(ScreenPyError::from)?;
  Ok(size.into())
}

/// point_visible(x, y) -> Boolean
///
/// Returns whether given (x, y) coordinate is inside the main screen.
#[pyfunction]
#[pyo3(signature = (x, y, /))]
fn point_visible(py: Python<'_>, x: &Bound<'_, PyAny>, y: &Bound<'_, PyAny>) -> PyResult<bool> {
  let (Some(x), Some(y)) = (coordinate(x, "x")?, coordinate(y, "y")?) else {
    log::trace!("point_visible: coordinate outside 64-bit range");
    return Ok(false);
  };
  Ok(py.allow_threads(|| default_screen().point_visible((x, y))))
}

/// autoscreen module for working with the screen
#[pymodule]
fn screen(m: &Bound<'_, PyModule>) -> PyResult<()> {
  let logger = env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV)).try_init();
  if logger.is_err() {
    log::debug!("Logger already installed, {LOG_ENV} ignored");
  }

  m.add_function(wrap_pyfunction!(get_size, m)?)?;
  m.add_function(wrap_pyfunction!(point_visible, m)?)?;
  m.add("__version__", env!("CARGO_PKG_VERSION"))?;

  Ok(())
}
