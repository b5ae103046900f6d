use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn map(&self, iterations: u32) -> Result<Colour, MandelbrotColourMapError> {
        if iterations > self.max_iterations {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let s = 1.0 - t;

        Ok(Colour {
            r: (9.0 * s * t * t * t * 255.0) as u8,
            g: (15.0 * s * s * t * t * 255.0) as u8,
            b: (8.5 * s * s * s * t * 255.0) as u8,
        })
    }

    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::BlueWhiteGradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_both_ends() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(0), Ok(Colour::BLACK));
        assert_eq!(mapper.map(100), Ok(Colour::BLACK));
    }

    #[test]
    fn test_map_midpoint_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(50), Ok(Colour { r: 143, g: 239, b: 135 }));
    }

    #[test]
    fn test_map_quarter_gradient() {
        let mapper = MandelbrotBlueWhiteGradient::new(100);

        assert_eq!(mapper.map(25), Ok(Colour { r: 26, g: 134, b: 228 }));
    }
}
