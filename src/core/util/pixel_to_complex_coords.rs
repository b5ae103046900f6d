use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Maps a pixel onto the viewport.
///
/// Uses `col / width` rather than `col / (width - 1)`, so the last column and
/// row stop one step short of the viewport's maximum edge.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, size: ImageSize, viewport: ComplexRect) -> Complex {
    debug_assert!(size.contains_point(pixel));

    let real = viewport.top_left().real
        + (f64::from(pixel.x) / f64::from(size.width())) * viewport.width();
    let imag = viewport.top_left().imag
        + (f64::from(pixel.y) / f64::from(size.height())) * viewport.height();

    Complex { real, imag }
}
