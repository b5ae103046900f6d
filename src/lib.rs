mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::{command, parse_settings, try_parse_settings_from, RenderSettings};
pub use controllers::cli::render_command::RenderCommand;
pub use controllers::cli::report::{PrintLevel, RenderReport};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::partition_rows::partition_rows::{assign_rows, covered_rows, rows_for, RowAssignment};
pub use crate::core::actions::partition_rows::work_allocation::{UnknownWorkAllocation, WorkAllocation};
pub use crate::core::actions::render_image::ports::escape_time_kernel::{EscapeTimeKernel, KernelSample};
pub use crate::core::actions::render_image::render_image::{
    render_image, InvalidConfiguration, RenderImageError, RenderOutcome, RenderRequest, WorkerFailure,
};
pub use crate::core::data::colour::{Colour, ColourSeed};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::image::{Image, ImageError};
pub use crate::core::data::image_size::{ImageSize, ImageSizeError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotKernel, ThreadTint, DEFAULT_MAX_ITERATIONS};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
pub use presenters::file::ppm::{write_ppm, PpmFilePresenter};
