use std::io::{self, Write};
use std::time::Duration;

use crate::core::actions::partition_rows::work_allocation::WorkAllocation;
use crate::core::actions::render_image::render_image::RenderOutcome;

/// How much of the render report gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PrintLevel {
    TimeOnly,
    WithPixelCount,
    #[default]
    WithAllocation,
}

impl From<u8> for PrintLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::TimeOnly,
            1 => Self::WithPixelCount,
            _ => Self::WithAllocation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub allocation: WorkAllocation,
    pub inside_count: u64,
    pub elapsed: Duration,
}

impl From<&RenderOutcome> for RenderReport {
    fn from(outcome: &RenderOutcome) -> Self {
        Self {
            allocation: outcome.allocation,
            inside_count: outcome.inside_count,
            elapsed: outcome.elapsed,
        }
    }
}

impl RenderReport {
    /// Elapsed seconds always go last, on a line of their own.
    pub fn write_to<W: Write>(&self, level: PrintLevel, mut out: W) -> io::Result<()> {
        if level >= PrintLevel::WithAllocation {
            writeln!(out, "Work allocation: {}", self.allocation)?;
        }
        if level >= PrintLevel::WithPixelCount {
            writeln!(out, "Total Mandelbrot pixels: {}", self.inside_count)?;
        }
        writeln!(out, "{}", self.elapsed.as_secs_f64())
    }
}
