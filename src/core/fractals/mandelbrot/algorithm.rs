use crate::core::actions::render_image::ports::escape_time_kernel::{EscapeTimeKernel, KernelSample};
use crate::core::data::colour::{Colour, ColourSeed};
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::errors::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Whether pixels inside the set carry their worker's colour seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadTint {
    #[default]
    On,
    Off,
}

#[derive(Debug)]
pub struct MandelbrotKernel {
    max_iterations: u32,
    colour_map: Box<dyn MandelbrotColourMap>,
    tint: ThreadTint,
}

impl MandelbrotKernel {
    pub fn new(
        max_iterations: u32,
        colour_map_kind: MandelbrotColourMapKind,
        tint: ThreadTint,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            colour_map: mandelbrot_colour_map_factory(colour_map_kind, max_iterations),
            tint,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterations before `z` left the escape radius, or `None` if it never did.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> Option<u32> {
        let mut z = Complex::default();

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return Some(iteration);
            }
            z = z.square_add(c);
        }

        None
    }

    fn inside_colour(&self, seed: ColourSeed) -> Colour {
        match self.tint {
            ThreadTint::On => Colour::grey(seed.value()),
            ThreadTint::Off => Colour::BLACK,
        }
    }
}

impl EscapeTimeKernel for MandelbrotKernel {
    type Failure = MandelbrotColourMapError;

    fn evaluate(&self, point: Complex, seed: ColourSeed) -> Result<KernelSample, Self::Failure> {
        match self.escape_time(point) {
            Some(iterations) => Ok(KernelSample {
                colour: self.colour_map.map(iterations)?,
                inside: false,
            }),
            None => Ok(KernelSample {
                colour: self.inside_colour(seed),
                inside: true,
            }),
        }
    }
}
