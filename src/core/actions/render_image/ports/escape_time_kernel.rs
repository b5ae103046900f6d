use std::error::Error;

use crate::core::data::colour::{Colour, ColourSeed};
use crate::core::data::complex::Complex;

/// What a kernel reports for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelSample {
    pub colour: Colour,
    pub inside: bool,
}

/// Classifies a point of the complex plane and picks its colour.
///
/// Implementations are called from several render threads at once and must
/// not depend on call order.
pub trait EscapeTimeKernel {
    type Failure: Error;

    fn evaluate(&self, point: Complex, seed: ColourSeed) -> Result<KernelSample, Self::Failure>;
}
