/*!
The `Screen` facade: main display queries over a platform collaborator.

Each query goes straight to the platform. Nothing is cached, so two calls
may observe different sizes if the display configuration changed in between.
*/

use crate::platform::{CurrentPlatform, DisplayPlatform};
use crate::types::{DisplaySize, Point, ScreenResult};

/// Options consumed by platform backends.
#[derive(Debug, Default, Clone)]
pub(crate) struct ScreenConfig {
  /// X11 display to open instead of `$DISPLAY`. Ignored elsewhere.
  pub(crate) display_name: Option<String>,
}

/// Builder for configuring a [`Screen`] on the current platform.
///
/// # Example
///
/// ```no_run
/// let screen = autoscreen::Screen::builder()
///     .display_name(":1")
///     .build()?;
/// let size = screen.get_size()?;
/// # Ok::<(), autoscreen::ScreenError>(())
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct ScreenBuilder {
  config: ScreenConfig,
}

impl ScreenBuilder {
  /// Open this X11 display instead of `$DISPLAY`.
  ///
  /// Only the X11 backend uses it; other backends log and ignore it.
  pub fn display_name(mut self, name: impl Into<String>) -> Self {
    self.config.display_name = Some(name.into());
    self
  }

  /// Build the screen for the current platform.
  ///
  /// Returns `InvalidArgument` if the configuration can't be passed to the OS
  /// (e.g. a display name with an interior NUL).
  pub fn build(self) -> ScreenResult<Screen> {
    let platform = CurrentPlatform::from_config(&self.config)?;
    log::debug!("Screen using {} backend", platform.backend());
    Ok(Screen::with_platform(platform))
  }
}

/// Main display queries backed by a [`DisplayPlatform`].
///
/// Stateless: share freely across threads if the platform allows it.
#[derive(Debug, Default, Clone)]
pub struct Screen<P = CurrentPlatform> {
  platform: P,
}

impl Screen {
  /// Screen on the current platform with default options.
  ///
  /// For custom configuration, use [`Screen::builder()`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a builder for configuring a new Screen.
  pub fn builder() -> ScreenBuilder {
    ScreenBuilder::default()
  }
}

impl<P: DisplayPlatform> Screen<P> {
  /// Screen backed by a specific collaborator, e.g. a [`FixedDisplay`](crate::FixedDisplay).
  pub const fn with_platform(platform: P) -> Self {
    Self { platform }
  }

  /// The collaborator answering this screen's queries.
  pub const fn platform(&self) -> &P {
    &self.platform
  }

  /// Current pixel size of the main display.
  pub fn get_size(&self) -> ScreenResult<DisplaySize> {
    match self.platform.query_main_display_size() {
      Ok(size) => {
        log::trace!("Main display size {size} ({})", self.platform.backend());
        Ok(size)
      }
      Err(err) => {
        log::debug!("get_size failed: {err}");
        Err(err)
      }
    }
  }

  /// Whether `point` is inside the main display right now.
  ///
  /// Out-of-range coordinates are `false`, never an error.
  pub fn point_visible(&self, point: impl Into<Point>) -> bool {
    let point = point.into();
    let visible = self.platform.is_point_within_main_display(point);
    log::trace!("point_visible{point} = {visible}");
    visible
  }
}

/// Current pixel size of the main display, using the default [`Screen`].
pub fn get_size() -> ScreenResult<DisplaySize> {
  Screen::new().get_size()
}

/// Whether `(x, y)` is inside the main display, using the default [`Screen`].
pub fn point_visible(x: i64, y: i64) -> bool {
  Screen::new().point_visible((x, y))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::FixedDisplay;
  use crate::types::ScreenError;

  fn full_hd() -> Screen<FixedDisplay> {
    Screen::with_platform(FixedDisplay::new((1920, 1080)))
  }

  mod get_size {
    use super::*;

    #[test]
    fn returns_platform_size() {
      assert_eq!(full_hd().get_size(), Ok(DisplaySize::new(1920, 1080)));
    }

    #[test]
    fn repeated_calls_agree() {
      let screen = full_hd();
      assert_eq!(screen.get_size(), screen.get_size());
    }

    #[test]
    fn reflects_resolution_change() {
      let screen = full_hd();
      screen.platform().resize((1280, 720));
      assert_eq!(screen.get_size(), Ok(DisplaySize::new(1280, 720)));
    }

    #[test]
    fn surfaces_platform_failure() {
      let screen = Screen::with_platform(FixedDisplay::disconnected());
      assert!(matches!(
        screen.get_size(),
        Err(ScreenError::PlatformQueryFailure { .. })
      ));
    }
  }

  mod point_visible {
    use super::*;

    #[test]
    fn inside_points_are_visible() {
      let screen = full_hd();
      assert!(screen.point_visible((0, 0)));
      assert!(screen.point_visible((960, 540)));
      assert!(screen.point_visible((1919, 1079)));
    }

    #[test]
    fn boundary_exclusion_on_x() {
      let screen = full_hd();
      assert!(!screen.point_visible((-1, 0)), "x = -1");
      assert!(!screen.point_visible((1920, 0)), "x = width");
    }

    #[test]
    fn boundary_exclusion_on_y() {
      let screen = full_hd();
      assert!(!screen.point_visible((0, -1)), "y = -1");
      assert!(!screen.point_visible((0, 1080)), "y = height");
    }

    #[test]
    fn accepts_point_values() {
      assert!(full_hd().point_visible(Point::new(10, 10)));
    }

    #[test]
    fn platform_failure_is_not_visible() {
      let screen = Screen::with_platform(FixedDisplay::disconnected());
      assert!(!screen.point_visible((0, 0)));
    }
  }

  mod builder {
    use super::*;

    #[test]
    fn default_build_succeeds() {
      assert!(Screen::builder().build().is_ok());
    }

    #[test]
    fn display_name_is_recorded() {
      let builder = Screen::builder().display_name(":3");
      assert_eq!(builder.config.display_name.as_deref(), Some(":3"));
    }
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use crate::platform::FixedDisplay;
  use proptest::prelude::*;

  fn dimension() -> impl Strategy<Value = u32> {
    1..8_000u32
  }

  proptest! {
    /// Visibility agrees with the size just returned by get_size
    #[test]
    fn visibility_matches_reported_size(w in dimension(), h in dimension(), x in -10_000..10_000i64, y in -10_000..10_000i64) {
      let screen = Screen::with_platform(FixedDisplay::new((w, h)));
      let size = screen.get_size().unwrap();
      let expected = x >= 0 && x < i64::from(size.width) && y >= 0 && y < i64::from(size.height);
      prop_assert_eq!(screen.point_visible((x, y)), expected);
    }

    /// Edges one step outside the display are never visible
    #[test]
    fn edges_excluded(w in dimension(), h in dimension()) {
      let screen = Screen::with_platform(FixedDisplay::new((w, h)));
      let size = screen.get_size().unwrap();
      prop_assert!(!screen.point_visible((-1, 0)));
      prop_assert!(!screen.point_visible((i64::from(size.width), 0)));
      prop_assert!(!screen.point_visible((0, -1)));
      prop_assert!(!screen.point_visible((0, i64::from(size.height))));
    }
  }
}
