/*! Geometry types for main display coordinates. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the main display at query time.
///
/// A snapshot: it is never cached and may differ between queries
/// (e.g. after a resolution change).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[display("{width}x{height}")]
pub struct DisplaySize {
  pub width: u32,
  pub height: u32,
}

impl DisplaySize {
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// True if the display has no pixels along either axis.
  pub const fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }

  /// Check if a point lies on the display: `0 <= x < width`, `0 <= y < height`.
  pub fn contains(&self, point: Point) -> bool {
    (0..i64::from(self.width)).contains(&point.x)
      && (0..i64::from(self.height)).contains(&point.y)
  }
}

/// A point in the main display's pixel coordinate space.
///
/// Any integer is accepted; negative and off-display values are valid
/// and simply not visible.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[display("({x}, {y})")]
pub struct Point {
  pub x: i64,
  pub y: i64,
}

impl Point {
  pub const fn new(x: i64, y: i64) -> Self {
    Self { x, y }
  }
}
