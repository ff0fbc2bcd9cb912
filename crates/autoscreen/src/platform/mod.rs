/*! Platform Abstraction Layer */

mod fixed;
mod traits;

pub use fixed::FixedDisplay;
pub use traits::DisplayPlatform;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::MacosDisplay as CurrentPlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WindowsDisplay as CurrentPlatform;

#[cfg(all(unix, not(target_os = "macos"), feature = "x11"))]
mod x11;
#[cfg(all(unix, not(target_os = "macos"), feature = "x11"))]
pub use self::x11::X11Display as CurrentPlatform;

#[cfg(not(any(
  target_os = "macos",
  windows,
  all(unix, not(target_os = "macos"), feature = "x11")
)))]
mod unsupported;
#[cfg(not(any(
  target_os = "macos",
  windows,
  all(unix, not(target_os = "macos"), feature = "x11")
)))]
pub use unsupported::UnsupportedDisplay as CurrentPlatform;
