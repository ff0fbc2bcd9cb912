/*!
Xlib backend for the main display.

A connection is opened for every query and closed when it goes out of
scope, so a resolution change or a restarted X server is always observed.
*/

#![allow(unsafe_code)]

use std::ffi::{CStr, CString};
use std::ptr;
use std::sync::OnceLock;

use ::x11::xlib;

use super::DisplayPlatform;
use crate::screen::ScreenConfig;
use crate::types::{DisplaySize, ScreenError, ScreenResult};

const BACKEND: &str = "x11";

/// The default screen of an X display.
#[derive(Debug, Default, Clone)]
pub struct X11Display {
  /// Display to open; `None` means `$DISPLAY`.
  display_name: Option<CString>,
}

impl X11Display {
  pub(crate) fn from_config(config: &ScreenConfig) -> ScreenResult<Self> {
    let display_name = config
      .display_name
      .as_deref()
      .map(CString::new)
      .transpose()
      .map_err(|e| ScreenError::invalid_argument(format!("X11 display name: {e}")))?;
    Ok(Self { display_name })
  }

  fn describe(&self) -> String {
    match &self.display_name {
      Some(name) => name.to_string_lossy().into_owned(),
      None => "$DISPLAY".to_owned(),
    }
  }
}

/// `XInitThreads` must run before any other Xlib call when queries can come
/// from several threads. Runs once per process.
fn init_threads() -> bool {
  static THREADS_READY: OnceLock<bool> = OnceLock::new();
  *THREADS_READY.get_or_init(|| {
    let ready = unsafe { xlib::XInitThreads() } != 0;
    if !ready {
      log::warn!("XInitThreads failed");
    }
    ready
  })
}

/// Owned Xlib connection. Closes on drop.
struct Connection(ptr::NonNull<xlib::Display>);

impl Connection {
  fn open(name: Option<&CStr>) -> Option<Self> {
    if !init_threads() {
      return None;
    }
    let raw = unsafe { xlib::XOpenDisplay(name.map_or(ptr::null(), CStr::as_ptr)) };
    ptr::NonNull::new(raw).map(Self)
  }

  fn default_screen_size(&self) -> (i32, i32) {
    let display = self.0.as_ptr();
    unsafe {
      let screen = xlib::XDefaultScreen(display);
      (
        xlib::XDisplayWidth(display, screen),
        xlib::XDisplayHeight(display, screen),
      )
    }
  }
}

impl Drop for Connection {
  fn drop(&mut self) {
    let status = unsafe { xlib::XCloseDisplay(self.0.as_ptr()) };
    if status != 0 {
      log::debug!("XCloseDisplay returned non-zero status {status}");
    }
  }
}

impl DisplayPlatform for X11Display {
  fn backend(&self) -> &'static str {
    BACKEND
  }

  fn query_main_display_size(&self) -> ScreenResult<DisplaySize> {
    let connection = Connection::open(self.display_name.as_deref()).ok_or_else(|| {
      ScreenError::platform(BACKEND, format!("cannot open display {}", self.describe()))
    })?;

    let (width, height) = connection.default_screen_size();
    let to_pixels = |value: i32, axis: &str| {
      u32::try_from(value)
        .map_err(|_| ScreenError::platform(BACKEND, format!("negative {axis} {value}")))
    };

    Ok(DisplaySize::new(
      to_pixels(width, "width")?,
      to_pixels(height, "height")?,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_name_with_nul_is_rejected() {
    let config = ScreenConfig {
      display_name: Some("bad\0name".to_owned()),
    };
    let err = X11Display::from_config(&config).unwrap_err();
    assert!(matches!(err, ScreenError::InvalidArgument { .. }));
  }

  #[test]
  fn thread_support_is_initialised() {
    assert!(init_threads());
    assert!(init_threads(), "second call reuses the first result");
  }

  #[test]
  fn concurrent_queries_fail_cleanly() {
    let config = ScreenConfig {
      display_name: Some("no-such-host.invalid:42".to_owned()),
    };
    let display = X11Display::from_config(&config).unwrap();
    std::thread::scope(|s| {
      let handles: Vec<_> = (0..4)
        .map(|_| s.spawn(|| display.query_main_display_size()))
        .collect();
      for handle in handles {
        let result = handle.join().unwrap();
        assert!(matches!(
          result,
          Err(ScreenError::PlatformQueryFailure { backend: "x11", .. })
        ));
      }
    });
  }

  #[test]
  fn unreachable_display_is_a_platform_failure() {
    let config = ScreenConfig {
      display_name: Some("no-such-host.invalid:42".to_owned()),
    };
    let display = X11Display::from_config(&config).unwrap();
    let err = display.query_main_display_size().unwrap_err();
    assert!(
      matches!(err, ScreenError::PlatformQueryFailure { backend: "x11", .. }),
      "got {err:?}"
    );
  }
}
