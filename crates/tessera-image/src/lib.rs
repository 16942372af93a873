#![deny(missing_docs)]
//! Color and image types shared by the tessera editors, generators and layers.

/// rgb color representation.
pub mod color;

/// Error types for the image module.
pub mod error;

/// image representation as an immutable grid of colors.
pub mod image;

#[cfg(feature = "serde")]
mod serialization;

pub use crate::color::Color;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, DEFAULT_MAX_VALUE};
