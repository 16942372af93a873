use tessera_image::Image;
use tessera_imgproc::{Editor, ImageEditor, ImageGenerator};

use crate::{
    error::LayerError,
    layer::{Layer, LayerId},
};

#[derive(Clone, Debug)]
struct Slot {
    id: LayerId,
    layer: Layer,
}

/// A stack of layers with a current-layer cursor and a pending editor.
///
/// Layers are stacked in insertion order: index 0 is the bottom, the last
/// index is the top. The cursor refers to a layer by its [`LayerId`], so it
/// keeps pointing at the same layer when other layers are removed or moved.
///
/// The working image is always the image of the current layer. Every
/// operation that fails leaves the model unchanged.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image, ImageSize};
/// use tessera_imgproc::Editor;
/// use tessera_layers::LayeredModel;
///
/// let mut model = LayeredModel::new();
/// model.create_layer();
///
/// let image = Image::from_size_val(
///     ImageSize { width: 3, height: 3 },
///     Color::new(100, 100, 100),
///     255,
/// )
/// .unwrap();
///
/// model.set_image(image).unwrap();
/// model.set_effect(Editor::sepia());
/// model.apply_operation().unwrap();
///
/// assert_eq!(model.image().unwrap().get_pixel(1, 1).unwrap(), Color::new(135, 120, 93));
/// assert_eq!(model.current_position(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayeredModel {
    stack: Vec<Slot>,
    current: Option<LayerId>,
    editor: Option<Editor>,
    next_id: u64,
}

impl LayeredModel {
    /// Create a model with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty, visible layer on top and make it current.
    pub fn create_layer(&mut self) -> LayerId {
        self.push_layer(Layer::new())
    }

    /// Append `layer` on top of the stack and make it current.
    pub fn push_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.stack.push(Slot { id, layer });
        self.current = Some(id);
        log::debug!("created {} at index {}", id, self.stack.len() - 1);
        id
    }

    /// Remove the layer at `index` and return it.
    ///
    /// If the removed layer was current, the layer right below it becomes
    /// current. Removing the current bottom layer leaves no current layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if `index` is outside the stack.
    pub fn remove_layer(&mut self, index: usize) -> Result<Layer, LayerError> {
        self.check_index(index)?;

        let slot = self.stack.remove(index);
        if self.current == Some(slot.id) {
            self.current = index
                .checked_sub(1)
                .and_then(|below| self.stack.get(below))
                .map(|s| s.id);
        }

        log::debug!(
            "removed {} from index {}, current is now {:?}",
            slot.id,
            index,
            self.current()
        );
        Ok(slot.layer)
    }

    /// Swap the layers at `from` and `to`.
    ///
    /// The cursor stays on the same layer, which may now sit at a different index.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if either index is outside the stack.
    pub fn move_layer(&mut self, from: usize, to: usize) -> Result<(), LayerError> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.stack.swap(from, to);
        log::debug!("swapped layers {} and {}", from, to);
        Ok(())
    }

    /// Make the layer at `index` current.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if `index` is outside the stack.
    pub fn set_current(&mut self, index: usize) -> Result<(), LayerError> {
        self.check_index(index)?;
        self.current = Some(self.stack[index].id);
        Ok(())
    }

    /// Store `image` into the current layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NoCurrentLayer`] if there is no current layer.
    pub fn set_image(&mut self, image: Image) -> Result<(), LayerError> {
        let layer = self.current_layer_mut()?;
        layer.set_image(image);
        Ok(())
    }

    /// Set the editor used by [`LayeredModel::apply_operation`].
    pub fn set_effect(&mut self, editor: impl Into<Editor>) {
        let editor = editor.into();
        log::debug!("pending editor set to {}", editor.name());
        self.editor = Some(editor);
    }

    /// Apply the pending editor to the current layer.
    ///
    /// A downscale is applied to the image of every populated layer so that
    /// all layers keep the same size. Either all layers are resized or, on
    /// error, none is.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NoEditor`], [`LayerError::NoCurrentLayer`] or
    /// [`LayerError::NoWorkingImage`] when a prerequisite is missing, and
    /// [`LayerError::Imgproc`] if the editor rejects an image.
    pub fn apply_operation(&mut self) -> Result<(), LayerError> {
        let editor = self.editor.as_ref().ok_or(LayerError::NoEditor)?;
        let position = self.current_index().ok_or(LayerError::NoCurrentLayer)?;
        let working = self.stack[position]
            .layer
            .image()
            .ok_or(LayerError::NoWorkingImage)?;

        if !editor.is_downscale() {
            let edited = editor.apply(working)?;
            self.stack[position].layer.set_image(edited);
            return Ok(());
        }

        let resized = self
            .stack
            .iter()
            .map(|slot| slot.layer.image().map(|img| editor.apply(img)).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let mut count = 0;
        for (slot, image) in self.stack.iter_mut().zip(resized) {
            if let Some(image) = image {
                slot.layer.set_image(image);
                count += 1;
            }
        }
        log::debug!("downscaled {} layers", count);

        Ok(())
    }

    /// Show or hide the layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if `index` is outside the stack.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), LayerError> {
        self.check_index(index)?;
        self.stack[index].layer.set_visible(visible);
        Ok(())
    }

    /// Whether the current layer is visible.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NoCurrentLayer`] if there is no current layer.
    pub fn is_visible(&self) -> Result<bool, LayerError> {
        Ok(self.current_layer()?.is_visible())
    }

    /// Whether the layer at `index` is visible.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if `index` is outside the stack.
    pub fn is_layer_visible(&self, index: usize) -> Result<bool, LayerError> {
        Ok(self.layer(index)?.is_visible())
    }

    /// Run `generator` and return the image it creates.
    ///
    /// The model is not changed; the caller decides where the image goes.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NoCurrentLayer`] if there is no current layer,
    /// and [`LayerError::Imgproc`] if the generator fails.
    pub fn draw(&self, generator: &dyn ImageGenerator) -> Result<Image, LayerError> {
        self.current_layer()?;
        Ok(generator.create()?)
    }

    /// The working image: the image of the current layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::NoWorkingImage`] if there is no current layer or it is empty.
    pub fn image(&self) -> Result<&Image, LayerError> {
        self.current_layer()
            .ok()
            .and_then(Layer::image)
            .ok_or(LayerError::NoWorkingImage)
    }

    /// The pending editor, if any.
    pub fn effect(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// Height of the working image.
    pub fn image_height(&self) -> Result<usize, LayerError> {
        Ok(self.image()?.height())
    }

    /// Width of the working image.
    pub fn image_width(&self) -> Result<usize, LayerError> {
        Ok(self.image()?.width())
    }

    /// The image of the highest visible layer that holds one.
    pub fn topmost_visible_image(&self) -> Option<&Image> {
        self.stack
            .iter()
            .rev()
            .filter(|slot| slot.layer.is_visible())
            .find_map(|slot| slot.layer.image())
    }

    /// The layers from bottom to top.
    pub fn layers(&self) -> impl DoubleEndedIterator<Item = &Layer> + ExactSizeIterator {
        self.stack.iter().map(|slot| &slot.layer)
    }

    /// The layer at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::LayerIndexOutOfBounds`] if `index` is outside the stack.
    pub fn layer(&self, index: usize) -> Result<&Layer, LayerError> {
        self.check_index(index)?;
        Ok(&self.stack[index].layer)
    }

    /// The index of the layer with identifier `id`, if it is still in the stack.
    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.stack.iter().position(|slot| slot.id == id)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack has no layers.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The identifier of the current layer.
    pub fn current_id(&self) -> Option<LayerId> {
        self.current
    }

    /// The 0-based index of the current layer.
    pub fn current(&self) -> Option<usize> {
        self.current_index()
    }

    /// The 1-based position of the current layer, 0 when there is none.
    pub fn current_position(&self) -> usize {
        self.current_index().map_or(0, |index| index + 1)
    }

    fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.index_of(id))
    }

    fn current_layer(&self) -> Result<&Layer, LayerError> {
        let index = self.current_index().ok_or(LayerError::NoCurrentLayer)?;
        Ok(&self.stack[index].layer)
    }

    fn current_layer_mut(&mut self) -> Result<&mut Layer, LayerError> {
        let index = self.current_index().ok_or(LayerError::NoCurrentLayer)?;
        Ok(&mut self.stack[index].layer)
    }

    fn check_index(&self, index: usize) -> Result<(), LayerError> {
        if index >= self.stack.len() {
            return Err(LayerError::LayerIndexOutOfBounds {
                index,
                len: self.stack.len(),
            });
        }
        Ok(())
    }
}
