/*!
Platform abstraction trait.

This trait is the contract between the `Screen` facade and the OS.
Per-OS backends implement it; the facade only ever talks to the trait.
*/

use crate::types::{DisplaySize, Point, ScreenResult};

/// A collaborator that can read the main display's geometry.
///
/// Implementations must be cheap to call repeatedly: nothing is cached,
/// every query goes to the OS.
pub trait DisplayPlatform: Send + Sync {
  /// Short backend name used in errors and logs (e.g. `"x11"`).
  fn backend(&self) -> &'static str;

  /// Fetch the main display's current pixel size.
  ///
  /// Fails with `PlatformQueryFailure` if the OS call fails.
  fn query_main_display_size(&self) -> ScreenResult<DisplaySize>;

  /// Check whether a point lies within the main display.
  ///
  /// Never fails. A failed size query is logged and reported as `false`.
  fn is_point_within_main_display(&self, point: Point) -> bool {
    match self.query_main_display_size() {
      Ok(size) => size.contains(point),
      Err(err) => {
        log::warn!("Treating {point} as not visible: {err}");
        false
      }
    }
  }
}
