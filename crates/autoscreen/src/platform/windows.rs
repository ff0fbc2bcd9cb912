/*! Win32 backend for the main display. */

#![allow(unsafe_code)]

use windows_sys::Win32::UI::WindowsAndMessaging::{
  GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN, SYSTEM_METRICS_INDEX,
};

use super::DisplayPlatform;
use crate::screen::ScreenConfig;
use crate::types::{DisplaySize, ScreenError, ScreenResult};

const BACKEND: &str = "win32";

/// The primary monitor as reported by `GetSystemMetrics`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsDisplay;

impl WindowsDisplay {
  #[allow(clippy::unnecessary_wraps)]
  pub(crate) fn from_config(config: &ScreenConfig) -> ScreenResult<Self> {
    if let Some(name) = &config.display_name {
      log::debug!("Display name {name:?} ignored by the {BACKEND} backend");
    }
    Ok(Self)
  }
}

/// `GetSystemMetrics` returns 0 on failure.
fn system_metric(index: SYSTEM_METRICS_INDEX, what: &str) -> ScreenResult<u32> {
  let value = unsafe { GetSystemMetrics(index) };
  u32::try_from(value)
    .ok()
    .filter(|v| *v > 0)
    .ok_or_else(|| {
      ScreenError::platform(BACKEND, format!("GetSystemMetrics({what}) returned {value}"))
    })
}

impl DisplayPlatform for WindowsDisplay {
  fn backend(&self) -> &'static str {
    BACKEND
  }

  fn query_main_display_size(&self) -> ScreenResult<DisplaySize> {
    Ok(DisplaySize::new(
      system_metric(SM_CXSCREEN, "SM_CXSCREEN")?,
      system_metric(SM_CYSCREEN, "SM_CYSCREEN")?,
    ))
  }
}
