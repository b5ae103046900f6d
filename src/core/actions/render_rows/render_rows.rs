use crate::core::actions::render_image::ports::escape_time_kernel::{EscapeTimeKernel, KernelSample};
use crate::core::data::colour::{Colour, ColourSeed};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// A row index and exclusive access to that row's pixels.
pub type OwnedRow<'img> = (u32, &'img mut [Colour]);

/// Renders every pixel of `rows` and returns how many landed inside the set.
///
/// The count is local to this call; callers sum worker counts once all
/// workers have finished. Stops at the first kernel failure.
pub fn render_rows<K: EscapeTimeKernel>(
    rows: Vec<OwnedRow<'_>>,
    size: ImageSize,
    viewport: ComplexRect,
    kernel: &K,
    seed: ColourSeed,
) -> Result<u64, K::Failure> {
    let mut inside_count: u64 = 0;

    for (y, pixels) in rows {
        debug_assert_eq!(pixels.len(), size.width() as usize);

        for (x, pixel) in (0..size.width()).zip(pixels.iter_mut()) {
            let point = pixel_to_complex_coords(Point { x, y }, size, viewport);
            let KernelSample { colour, inside } = kernel.evaluate(point, seed)?;

            *pixel = colour;

            if inside {
                inside_count += 1;
            }
        }
    }

    Ok(inside_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    /// Inside whenever the real part is negative; colour echoes the seed.
    struct StubNegativeRealKernel {}

    impl EscapeTimeKernel for StubNegativeRealKernel {
        type Failure = StubError;

        fn evaluate(&self, point: Complex, seed: ColourSeed) -> Result<KernelSample, Self::Failure> {
            Ok(KernelSample {
                colour: Colour::grey(seed.value()),
                inside: point.real < 0.0,
            })
        }
    }

    struct StubFailureKernel {}

    impl EscapeTimeKernel for StubFailureKernel {
        type Failure = StubError;

        fn evaluate(&self, _: Complex, _: ColourSeed) -> Result<KernelSample, Self::Failure> {
            Err(StubError {})
        }
    }

    fn viewport() -> ComplexRect {
        ComplexRect::from_bounds(-1.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_renders_owned_rows_and_counts_inside_pixels() {
        let size = ImageSize::new(4, 3).unwrap();
        let mut row_a = vec![Colour::BLACK; 4];
        let mut row_b = vec![Colour::BLACK; 4];
        let seed = ColourSeed::for_thread(1, 2);

        let count = render_rows(
            vec![(0, &mut row_a[..]), (2, &mut row_b[..])],
            size,
            viewport(),
            &StubNegativeRealKernel {},
            seed,
        )
        .unwrap();

        // columns 0 and 1 map to -1.0 and -0.5
        assert_eq!(count, 4);
        assert!(row_a.iter().chain(row_b.iter()).all(|&p| p == Colour::grey(127)));
    }

    #[test]
    fn test_no_rows_counts_nothing() {
        let size = ImageSize::new(4, 3).unwrap();

        let count = render_rows(
            Vec::new(),
            size,
            viewport(),
            &StubNegativeRealKernel {},
            ColourSeed::default(),
        );

        assert_eq!(count, Ok(0));
    }

    #[test]
    fn test_propagates_kernel_failure() {
        let size = ImageSize::new(2, 2).unwrap();
        let mut row = vec![Colour::BLACK; 2];

        let result = render_rows(
            vec![(1, &mut row[..])],
            size,
            viewport(),
            &StubFailureKernel {},
            ColourSeed::default(),
        );

        assert_eq!(result, Err(StubError {}));
    }
}
