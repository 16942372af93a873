use rand::{rngs::StdRng, Rng, SeedableRng};
use tessera_image::{Color, Image, ImageError};

use crate::{editor::ImageEditor, error::ImgprocError};

/// Split an image into regions around randomly chosen seed pixels and paint
/// each region with its average color.
///
/// `num_seeds` distinct pixels are drawn uniformly without replacement. Every
/// other pixel joins the seed closest to it and every region is filled with
/// the floor of the mean of its channels. Seeds are never moved, so this is a
/// single nearest-seed partition rather than k-means.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image, ImageSize};
/// use tessera_imgproc::{mosaic::Mosaic, ImageEditor};
///
/// let image = Image::from_size_val(
///     ImageSize { width: 8, height: 8 },
///     Color::new(12, 34, 56),
///     255,
/// )
/// .unwrap();
///
/// let mosaic = Mosaic::with_seed(5, 42).unwrap();
/// assert_eq!(mosaic.apply(&image).unwrap(), image);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mosaic {
    num_seeds: usize,
    rng_seed: Option<u64>,
}

impl Mosaic {
    /// Create a mosaic with `num_seeds` regions, seeded from the thread rng.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::InvalidSeedCount`] if `num_seeds` is zero.
    pub fn new(num_seeds: usize) -> Result<Self, ImgprocError> {
        if num_seeds == 0 {
            return Err(ImgprocError::InvalidSeedCount(num_seeds));
        }
        Ok(Self {
            num_seeds,
            rng_seed: None,
        })
    }

    /// Create a mosaic whose seed positions are reproducible from `rng_seed`.
    pub fn with_seed(num_seeds: usize, rng_seed: u64) -> Result<Self, ImgprocError> {
        let mut mosaic = Self::new(num_seeds)?;
        mosaic.rng_seed = Some(rng_seed);
        Ok(mosaic)
    }

    /// The number of regions.
    pub fn num_seeds(&self) -> usize {
        self.num_seeds
    }

    /// Apply the mosaic drawing seed positions from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ImgprocError::TooManySeeds`] if the image has fewer pixels than seeds.
    pub fn apply_with_rng<R: Rng + ?Sized>(
        &self,
        src: &Image,
        rng: &mut R,
    ) -> Result<Image, ImgprocError> {
        let pixels = src.size().area();
        if self.num_seeds > pixels {
            return Err(ImgprocError::TooManySeeds {
                seeds: self.num_seeds,
                pixels,
            });
        }

        let cols = src.cols();
        let seeds: Vec<(usize, usize)> = rand::seq::index::sample(rng, pixels, self.num_seeds)
            .into_iter()
            .map(|idx| (idx % cols, idx / cols))
            .collect();

        log::trace!("mosaic seeds: {:?}", seeds);

        mosaic_from_seeds(src, &seeds)
    }
}

impl ImageEditor for Mosaic {
    fn apply(&self, src: &Image) -> Result<Image, ImgprocError> {
        match self.rng_seed {
            Some(seed) => self.apply_with_rng(src, &mut StdRng::seed_from_u64(seed)),
            None => self.apply_with_rng(src, &mut rand::rng()),
        }
    }
}

/// Partition the image around the given seeds and fill every region with its mean color.
///
/// Each non-seed pixel joins the seed at the smallest Euclidean distance.
/// On a tie the seed that comes first in `seeds` wins.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `seeds` - Seed positions as `(x, y)`, in priority order.
///
/// # Errors
///
/// Returns [`ImgprocError::InvalidSeedCount`] for an empty seed list,
/// [`ImgprocError::DuplicateSeed`] if a position repeats and
/// [`ImageError::PixelIndexOutOfBounds`] for a seed outside the image.
///
/// # Example
///
/// ```
/// use tessera_image::{Color, Image};
/// use tessera_imgproc::mosaic::mosaic_from_seeds;
///
/// let g = |v| Color::new(v, v, v);
/// let image = Image::from_rows(&[vec![g(10), g(20), g(60)]], 255).unwrap();
///
/// // the middle pixel is equidistant and joins the first seed
/// let out = mosaic_from_seeds(&image, &[(0, 0), (2, 0)]).unwrap();
/// assert_eq!(out.to_rows(), vec![vec![g(15), g(15), g(60)]]);
/// ```
pub fn mosaic_from_seeds(src: &Image, seeds: &[(usize, usize)]) -> Result<Image, ImgprocError> {
    if seeds.is_empty() {
        return Err(ImgprocError::InvalidSeedCount(0));
    }

    let (cols, rows) = (src.cols(), src.rows());

    // seed index owning each pixel, seeds first
    let mut owner: Vec<Option<usize>> = vec![None; cols * rows];
    for (k, &(x, y)) in seeds.iter().enumerate() {
        if x >= cols || y >= rows {
            return Err(ImageError::PixelIndexOutOfBounds(x, y, cols, rows).into());
        }
        let slot = &mut owner[y * cols + x];
        if slot.is_some() {
            return Err(ImgprocError::DuplicateSeed(x, y));
        }
        *slot = Some(k);
    }

    let mut sums = vec![[0u64; 3]; seeds.len()];
    let mut counts = vec![0u64; seeds.len()];

    for (idx, (slot, color)) in owner.iter_mut().zip(src.as_slice()).enumerate() {
        let k = match *slot {
            Some(k) => k,
            None => {
                let k = nearest_seed(idx % cols, idx / cols, seeds);
                *slot = Some(k);
                k
            }
        };
        for (acc, v) in sums[k].iter_mut().zip(color.to_array()) {
            *acc += u64::from(v);
        }
        counts[k] += 1;
    }

    let means: Vec<Color> = sums
        .iter()
        .zip(counts.iter())
        .map(|(sum, &n)| {
            // every region holds at least its seed
            let mean = |s: u64| u32::try_from(s / n).unwrap_or(u32::MAX);
            Color::new(mean(sum[0]), mean(sum[1]), mean(sum[2]))
        })
        .collect();

    log::debug!(
        "mosaic with {} seeds over a {}x{} image",
        seeds.len(),
        cols,
        rows
    );

    let data = owner
        .iter()
        .map(|slot| slot.map(|k| means[k]).unwrap_or_default())
        .collect();

    Ok(Image::new(src.size(), data, src.max_value())?)
}

// first seed with the strictly smallest squared distance
fn nearest_seed(x: usize, y: usize, seeds: &[(usize, usize)]) -> usize {
    let mut best = 0;
    let mut best_dist = u64::MAX;
    for (k, &(sx, sy)) in seeds.iter().enumerate() {
        let dx = x.abs_diff(sx) as u64;
        let dy = y.abs_diff(sy) as u64;
        let dist = dx * dx + dy * dy;
        if dist < best_dist {
            best = k;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_image::ImageSize;

    fn g(v: u32) -> Color {
        Color::new(v, v, v)
    }

    fn ramp(width: usize, height: usize) -> Result<Image, ImageError> {
        let data = (0..width * height)
            .map(|i| Color::new((i % 256) as u32, (i * 7 % 256) as u32, 100))
            .collect();
        Image::new(ImageSize { width, height }, data, 255)
    }

    #[test]
    fn test_invalid_seed_count() {
        assert_eq!(Mosaic::new(0), Err(ImgprocError::InvalidSeedCount(0)));
        assert_eq!(
            Mosaic::with_seed(0, 1),
            Err(ImgprocError::InvalidSeedCount(0))
        );
    }

    #[test]
    fn test_num_seeds() -> Result<(), ImgprocError> {
        assert_eq!(Mosaic::new(4)?.num_seeds(), 4);
        assert_eq!(Mosaic::with_seed(9, 0)?.num_seeds(), 9);
        Ok(())
    }

    #[test]
    fn test_too_many_seeds() -> Result<(), ImgprocError> {
        let image = ramp(2, 2)?;
        assert_eq!(
            Mosaic::new(5)?.apply(&image),
            Err(ImgprocError::TooManySeeds {
                seeds: 5,
                pixels: 4
            })
        );
        Ok(())
    }

    #[test]
    fn test_uniform_unchanged() -> Result<(), ImgprocError> {
        let image = Image::from_size_val([7, 5].into(), Color::new(9, 99, 199), 255)?;
        for k in [1, 3, 35] {
            assert_eq!(Mosaic::new(k)?.apply(&image)?, image);
        }
        Ok(())
    }

    #[test]
    fn test_one_seed_averages_everything() -> Result<(), ImgprocError> {
        let image = Image::from_rows(&[vec![g(1), g(2)], vec![g(3), g(5)]], 255)?;
        let out = Mosaic::with_seed(1, 7)?.apply(&image)?;
        // (1 + 2 + 3 + 5) / 4 = 2.75 -> 2
        assert!(out.as_slice().iter().all(|&c| c == g(2)));
        Ok(())
    }

    #[test]
    fn test_all_pixels_as_seeds() -> Result<(), ImgprocError> {
        let image = ramp(4, 3)?;
        let out = Mosaic::with_seed(12, 3)?.apply(&image)?;
        assert_eq!(out, image);
        Ok(())
    }

    #[test]
    fn test_reproducible_with_seed() -> Result<(), ImgprocError> {
        let image = ramp(16, 9)?;
        let a = Mosaic::with_seed(6, 1234)?.apply(&image)?;
        let b = Mosaic::with_seed(6, 1234)?.apply(&image)?;
        assert_eq!(a, b);
        assert_eq!(a.size(), image.size());
        assert_eq!(a.max_value(), image.max_value());

        let mut rng = StdRng::seed_from_u64(1234);
        let c = Mosaic::new(6)?.apply_with_rng(&image, &mut rng)?;
        assert_eq!(a, c);

        // at most one distinct color per region
        let mut colors: Vec<Color> = a.as_slice().to_vec();
        colors.sort_by_key(|c| c.to_array());
        colors.dedup();
        assert!(colors.len() <= 6);
        Ok(())
    }

    #[test]
    fn test_tie_break_prefers_first_seed() -> Result<(), ImgprocError> {
        let image = Image::from_rows(&[vec![g(10), g(20), g(60)]], 255)?;

        let out = mosaic_from_seeds(&image, &[(0, 0), (2, 0)])?;
        assert_eq!(out.to_rows(), vec![vec![g(15), g(15), g(60)]]);

        let out = mosaic_from_seeds(&image, &[(2, 0), (0, 0)])?;
        assert_eq!(out.to_rows(), vec![vec![g(10), g(40), g(40)]]);
        Ok(())
    }

    #[test]
    fn test_nearest_seed_partition() -> Result<(), ImgprocError> {
        #[rustfmt::skip]
        let image = Image::from_rows(&[
            vec![g(0), g(10), g(20)],
            vec![g(30), g(40), g(50)],
            vec![g(60), g(70), g(80)],
        ], 255)?;

        let out = mosaic_from_seeds(&image, &[(0, 0), (2, 2)])?;

        // the anti-diagonal is equidistant and goes to the first seed:
        // 160 / 6 -> 26 and 200 / 3 -> 66
        #[rustfmt::skip]
        let expected = vec![
            vec![g(26), g(26), g(26)],
            vec![g(26), g(26), g(66)],
            vec![g(26), g(66), g(66)],
        ];
        assert_eq!(out.to_rows(), expected);
        Ok(())
    }

    #[test]
    fn test_bad_seeds() -> Result<(), ImgprocError> {
        let image = ramp(3, 3)?;
        assert_eq!(
            mosaic_from_seeds(&image, &[]),
            Err(ImgprocError::InvalidSeedCount(0))
        );
        assert_eq!(
            mosaic_from_seeds(&image, &[(1, 1), (1, 1)]),
            Err(ImgprocError::DuplicateSeed(1, 1))
        );
        assert_eq!(
            mosaic_from_seeds(&image, &[(3, 0)]),
            Err(ImgprocError::Image(ImageError::PixelIndexOutOfBounds(
                3, 0, 3, 3
            )))
        );
        Ok(())
    }
}
