/*! `CoreGraphics` backend for the main display. */

use objc2_core_graphics::{CGDisplayPixelsHigh, CGDisplayPixelsWide, CGMainDisplayID};

use super::DisplayPlatform;
use crate::screen::ScreenConfig;
use crate::types::{DisplaySize, ScreenError, ScreenResult};

const BACKEND: &str = "coregraphics";

/// `kCGNullDirectDisplay`
const NULL_DIRECT_DISPLAY: u32 = 0;

/// The main display as reported by `CoreGraphics`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacosDisplay;

impl MacosDisplay {
  #[allow(clippy::unnecessary_wraps)]
  pub(crate) fn from_config(config: &ScreenConfig) -> ScreenResult<Self> {
    if let Some(name) = &config.display_name {
      log::debug!("Display name {name:?} ignored by the {BACKEND} backend");
    }
    Ok(Self)
  }
}

impl DisplayPlatform for MacosDisplay {
  fn backend(&self) -> &'static str {
    BACKEND
  }

  fn query_main_display_size(&self) -> ScreenResult<DisplaySize> {
    let display_id = CGMainDisplayID();
    if display_id == NULL_DIRECT_DISPLAY {
      return Err(ScreenError::platform(BACKEND, "no main display"));
    }

    let width = u32::try_from(CGDisplayPixelsWide(display_id))
      .map_err(|e| ScreenError::platform(BACKEND, format!("display width: {e}")))?;
    let height = u32::try_from(CGDisplayPixelsHigh(display_id))
      .map_err(|e| ScreenError::platform(BACKEND, format!("display height: {e}")))?;

    Ok(DisplaySize::new(width, height))
  }
}
