use tessera_image::ImageError;
use tessera_imgproc::ImgprocError;

/// An error type for the layered model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The layer index is outside the stack.
    #[error("Layer index {index} is out of bounds for a stack of {len} layers")]
    LayerIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of layers in the stack.
        len: usize,
    },

    /// The operation needs a current layer and there is none.
    #[error("No current layer, create a layer first")]
    NoCurrentLayer,

    /// An operation was applied before an editor was set.
    #[error("No editor has been set")]
    NoEditor,

    /// The current layer holds no image.
    #[error("The current layer holds no image")]
    NoWorkingImage,

    /// Error coming from an image.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error coming from an editor or a generator.
    #[error(transparent)]
    Imgproc(#[from] ImgprocError),
}
