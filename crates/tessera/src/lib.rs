#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use tessera_image as image;

#[doc(inline)]
pub use tessera_imgproc as imgproc;

#[doc(inline)]
pub use tessera_layers as layers;
