/*! Core types for autoscreen. */

#![allow(missing_docs)]

mod error;
mod geometry;

pub use error::{ScreenError, ScreenResult};
pub use geometry::{DisplaySize, Point};
