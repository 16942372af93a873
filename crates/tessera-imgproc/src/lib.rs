#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// per-pixel helpers shared by the editors.
pub mod core;

/// editor trait and the set of built-in editors.
pub mod editor;

/// Error types for the imgproc module.
pub mod error;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// seed based mosaic clustering.
pub mod mosaic;

/// generated images such as checkerboards and rainbows.
pub mod pattern;

/// utility functions for downscaling images.
pub mod resize;

pub use crate::editor::{Editor, ImageEditor};
pub use crate::error::ImgprocError;
pub use crate::pattern::ImageGenerator;
