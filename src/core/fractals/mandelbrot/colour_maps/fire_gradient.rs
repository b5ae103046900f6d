use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;

/// Black through red, orange and yellow to white as escape time grows.
#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
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
        // position inside the current quarter of the gradient
        let local_t = (t % 0.25) / 0.25;

        let (r, g, b) = match (t / 0.25) as u32 {
            0 => ((local_t * 255.0) as u8, 0, 0),
            1 => (255, (local_t * 165.0) as u8, 0),
            2 => (255, (165.0 + local_t * 90.0) as u8, 0),
            _ => (255, 255, (local_t * 255.0) as u8),
        };

        Ok(Colour { r, g, b })
    }

    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}
