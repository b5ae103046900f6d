use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    PixelOutsideBounds {
        pixel: Point,
        size: ImageSize,
    },
    BoundsMismatch {
        expected_pixels: usize,
        actual_pixels: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of image bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
            Self::BoundsMismatch {
                expected_pixels,
                actual_pixels,
            } => {
                write!(
                    f,
                    "image size {} does not match pixel count {}",
                    expected_pixels, actual_pixels
                )
            }
        }
    }
}

impl Error for ImageError {}

/// Row-major RGB image.
///
/// Rows are handed out as disjoint mutable slices through [`Image::rows_mut`],
/// which is what lets render workers write without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    size: ImageSize,
    pixels: Vec<Colour>,
}

impl Image {
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            pixels: vec![Colour::default(); size.pixel_count()],
        }
    }

    pub fn from_pixels(size: ImageSize, pixels: Vec<Colour>) -> Result<Self, ImageError> {
        if pixels.len() != size.pixel_count() {
            return Err(ImageError::BoundsMismatch {
                expected_pixels: size.pixel_count(),
                actual_pixels: pixels.len(),
            });
        }

        Ok(Self { size, pixels })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.size
            .contains_point(pixel)
            .then(|| self.pixels[self.index_of(pixel)])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), ImageError> {
        if !self.size.contains_point(pixel) {
            return Err(ImageError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let index = self.index_of(pixel);
        self.pixels[index] = colour;

        Ok(())
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Colour]> {
        if y >= self.height() {
            return None;
        }

        let width = self.width() as usize;
        let start = y as usize * width;
        Some(&self.pixels[start..start + width])
    }

    /// Mutable rows in order; row `n` is the `n`th item.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Colour> {
        let width = self.width() as usize;
        self.pixels.chunks_exact_mut(width)
    }

    /// Packs the image into interleaved `r, g, b` bytes, row-major.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0; self.pixels.len() * 3];

        bytes
            .par_chunks_exact_mut(3)
            .zip(self.pixels.par_iter())
            .for_each(|(rgb, colour)| {
                rgb[0] = colour.r;
                rgb[1] = colour.g;
                rgb[2] = colour.b;
            });

        bytes
    }

    fn index_of(&self, pixel: Point) -> usize {
        pixel.y as usize * self.width() as usize + pixel.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_size(width: u32, height: u32) -> ImageSize {
        ImageSize::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_image() {
        let image = Image::new(create_size(10, 10));

        assert_eq!(image.pixels().len(), 100);
        assert!(image.pixels().iter().all(|&p| p == Colour::BLACK));
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let result = Image::from_pixels(create_size(2, 2), vec![Colour::BLACK; 3]);

        assert_eq!(
            result.unwrap_err(),
            ImageError::BoundsMismatch {
                expected_pixels: 4,
                actual_pixels: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut image = Image::new(create_size(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        image.set_pixel(Point { x: 1, y: 2 }, red).unwrap();

        assert_eq!(image.pixels()[7], red);
        assert_eq!(image.pixel(Point { x: 1, y: 2 }), Some(red));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let size = create_size(3, 3);
        let mut image = Image::new(size);

        let result = image.set_pixel(Point { x: 3, y: 0 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(ImageError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                size
            })
        );
        assert_eq!(image.pixel(Point { x: 0, y: 3 }), None);
    }

    #[test]
    fn test_rows_mut_yields_one_slice_per_row() {
        let mut image = Image::new(create_size(4, 3));

        for (y, row) in image.rows_mut().enumerate() {
            assert_eq!(row.len(), 4);
            row.fill(Colour::grey(y as u8));
        }

        assert_eq!(image.row(0), Some(&[Colour::grey(0); 4][..]));
        assert_eq!(image.row(2), Some(&[Colour::grey(2); 4][..]));
        assert_eq!(image.row(3), None);
    }

    #[test]
    fn test_to_rgb_bytes_interleaves_channels() {
        let pixels = vec![
            Colour { r: 255, g: 0, b: 0 },
            Colour { r: 0, g: 255, b: 0 },
            Colour { r: 0, g: 0, b: 255 },
            Colour { r: 255, g: 255, b: 0 },
        ];
        let image = Image::from_pixels(create_size(2, 2), pixels).unwrap();

        let expected: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];
        assert_eq!(image.to_rgb_bytes(), expected);
    }
}
