/*! Fallback for targets without a display backend. */

use super::DisplayPlatform;
use crate::screen::ScreenConfig;
use crate::types::{DisplaySize, ScreenError, ScreenResult};

const BACKEND: &str = "unsupported";

#[cfg(unix)]
const REASON: &str = "built without the `x11` feature";
#[cfg(not(unix))]
const REASON: &str = "no display backend for this target";

/// Every size query fails; no point is ever visible.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDisplay;

impl UnsupportedDisplay {
  #[allow(clippy::unnecessary_wraps)]
  pub(crate) fn from_config(_config: &ScreenConfig) -> ScreenResult<Self> {
    Ok(Self)
  }
}

impl DisplayPlatform for UnsupportedDisplay {
  fn backend(&self) -> &'static str {
    BACKEND
  }

  fn query_main_display_size(&self) -> ScreenResult<DisplaySize> {
    Err(ScreenError::platform(BACKEND, REASON))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Point;

  #[test]
  fn size_query_fails() {
    let err = UnsupportedDisplay.query_main_display_size().unwrap_err();
    assert_eq!(err, ScreenError::platform(BACKEND, REASON));
  }

  #[test]
  fn nothing_is_visible() {
    assert!(!UnsupportedDisplay.is_point_within_main_display(Point::new(0, 0)));
  }
}
