use tessera_image::Image;

/// Stable identifier of a layer inside a [`crate::LayeredModel`].
///
/// Identifiers are never reused by a model, so they stay valid while other
/// layers are added, moved or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(crate) u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// A layer: zero or one image plus a visibility flag.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image, ImageSize};
/// use tessera_layers::Layer;
///
/// let mut layer = Layer::new();
/// assert!(layer.is_empty());
/// assert!(layer.is_visible());
///
/// let image = Image::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     Color::new(1, 2, 3),
///     255,
/// )
/// .unwrap();
///
/// layer.set_image(image.clone());
/// layer.set_visible(false);
///
/// assert_eq!(layer.image(), Some(&image));
/// assert!(!layer.is_visible());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    image: Option<Image>,
    visible: bool,
}

impl Layer {
    /// Create an empty, visible layer.
    pub fn new() -> Self {
        Self {
            image: None,
            visible: true,
        }
    }

    /// Create a visible layer holding `image`.
    pub fn with_image(image: Image) -> Self {
        Self {
            image: Some(image),
            visible: true,
        }
    }

    /// The image of the layer, if one was loaded.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Replace the image of the layer.
    pub fn set_image(&mut self, image: Image) {
        self.image = Some(image);
    }

    /// Whether the layer is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the layer.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the layer holds no image.
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Image> for Layer {
    fn from(image: Image) -> Self {
        Self::with_image(image)
    }
}
