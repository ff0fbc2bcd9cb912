/*!
Headless display with a configurable size.

Stands in for a real OS display in tests and in embedders that run without
one. The size can be changed or removed at runtime to simulate resolution
changes and a lost display.
*/

use parking_lot::RwLock;

use super::DisplayPlatform;
use crate::types::{DisplaySize, ScreenError, ScreenResult};

const BACKEND: &str = "fixed";

/// An in-memory main display.
#[derive(Debug)]
pub struct FixedDisplay {
  size: RwLock<Option<DisplaySize>>,
}

impl FixedDisplay {
  /// A connected display of the given size.
  pub fn new(size: impl Into<DisplaySize>) -> Self {
    Self {
      size: RwLock::new(Some(size.into())),
    }
  }

  /// A display whose size queries always fail.
  pub fn disconnected() -> Self {
    Self {
      size: RwLock::new(None),
    }
  }

  /// Change the reported size, reconnecting if needed.
  pub fn resize(&self, size: impl Into<DisplaySize>) {
    let size = size.into();
    log::debug!("FixedDisplay resized to {size}");
    *self.size.write() = Some(size);
  }

  /// Make subsequent size queries fail.
  pub fn disconnect(&self) {
    *self.size.write() = None;
  }
}

impl DisplayPlatform for FixedDisplay {
  fn backend(&self) -> &'static str {
    BACKEND
  }

  fn query_main_display_size(&self) -> ScreenResult<DisplaySize> {
    let size = *self.size.read();
    size.ok_or_else(|| ScreenError::platform(BACKEND, "display disconnected"))
  }
}
