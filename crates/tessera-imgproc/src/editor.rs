use tessera_image::Image;

use crate::{
    color::ColorMatrix, error::ImgprocError, filter::Convolution, mosaic::Mosaic,
    resize::Downscale,
};

/// An operation that turns one image into a new one.
///
/// Editors never modify their input; they always return a fresh image.
pub trait ImageEditor {
    /// Apply the operation to `src`.
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError>;
}

/// The built-in editors.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image, ImageSize};
/// use tessera_imgproc::{Editor, ImageEditor};
///
/// let image = Image::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     Color::new(100, 100, 100),
///     255,
/// )
/// .unwrap();
///
/// let sepia = Editor::sepia().apply(&image).unwrap();
/// assert_eq!(sepia.get_pixel(0, 0).unwrap(), Color::new(135, 120, 93));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Editor {
    /// A convolution filter such as blur or sharpen.
    Convolution(Convolution),
    /// A per-pixel color matrix such as greyscale or sepia.
    ColorMatrix(ColorMatrix),
    /// A downscale to a fixed target size.
    Downscale(Downscale),
    /// A seed based mosaic.
    Mosaic(Mosaic),
}

impl Editor {
    /// The blur filter.
    pub fn blur() -> Self {
        Editor::Convolution(Convolution::blur())
    }

    /// The sharpen filter.
    pub fn sharpen() -> Self {
        Editor::Convolution(Convolution::sharpen())
    }

    /// The greyscale color transform.
    pub fn greyscale() -> Self {
        Editor::ColorMatrix(ColorMatrix::greyscale())
    }

    /// The sepia color transform.
    pub fn sepia() -> Self {
        Editor::ColorMatrix(ColorMatrix::sepia())
    }

    /// Whether the editor changes the image size.
    pub fn is_downscale(&self) -> bool {
        matches!(self, Editor::Downscale(_))
    }

    /// A short name of the editor kind.
    pub fn name(&self) -> &'static str {
        match self {
            Editor::Convolution(_) => "convolution",
            Editor::ColorMatrix(_) => "color-matrix",
            Editor::Downscale(_) => "downscale",
            Editor::Mosaic(_) => "mosaic",
        }
    }
}

impl ImageEditor for Editor {
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError> {
        log::debug!(
            "applying {} editor to a {}x{} image",
            self.name(),
            src.width(),
            src.height()
        );
        match self {
            Editor::Convolution(e) => e.apply(src),
            Editor::ColorMatrix(e) => e.apply(src),
            Editor::Downscale(e) => e.apply(src),
            Editor::Mosaic(e) => e.apply(src),
        }
    }
}

impl From<Convolution> for Editor {
    fn from(editor: Convolution) -> Self {
        Editor::Convolution(editor)
    }
}

impl From<ColorMatrix> for Editor {
    fn from(editor: ColorMatrix) -> Self {
        Editor::ColorMatrix(editor)
    }
}

impl From<Downscale> for Editor {
    fn from(editor: Downscale) -> Self {
        Editor::Downscale(editor)
    }
}

impl From<Mosaic> for Editor {
    fn from(editor: Mosaic) -> Self {
        Editor::Mosaic(editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_image::{Color, ImageSize};

    #[test]
    fn editor_kinds() -> Result<(), ImgprocError> {
        let downscale: Editor = Downscale::new(ImageSize {
            width: 1,
            height: 1,
        })?
        .into();
        assert!(downscale.is_downscale());
        assert!(!Editor::blur().is_downscale());
        assert_eq!(Editor::sharpen().name(), "convolution");
        assert_eq!(Editor::greyscale().name(), "color-matrix");
        assert_eq!(Editor::from(Mosaic::new(1)?).name(), "mosaic");
        Ok(())
    }

    #[test]
    fn editor_dispatch_matches_variant() -> Result<(), ImgprocError> {
        let image = Image::from_rows(
            &[
                vec![Color::new(10, 200, 30), Color::new(0, 0, 0)],
                vec![Color::new(255, 255, 255), Color::new(90, 12, 77)],
            ],
            255,
        )?;

        assert_eq!(
            Editor::greyscale().apply(&image)?,
            ColorMatrix::greyscale().apply(&image)?
        );
        assert_eq!(
            Editor::blur().apply(&image)?,
            Convolution::blur().apply(&image)?
        );
        Ok(())
    }
}
