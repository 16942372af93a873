#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the layers module.
pub mod error;

/// a single layer: an optional image and a visibility flag.
pub mod layer;

/// the layer stack and its current-layer cursor.
pub mod model;

pub use crate::error::LayerError;
pub use crate::layer::{Layer, LayerId};
pub use crate::model::LayeredModel;
