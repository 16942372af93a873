//! Filter operations
//!
//! This module provides convolution filters for image processing.

/// Filter kernels
pub mod kernels;

/// Convolution operations
mod convolution;
pub use convolution::*;
