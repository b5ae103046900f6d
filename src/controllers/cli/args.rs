use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::controllers::cli::report::PrintLevel;
use crate::core::actions::partition_rows::work_allocation::WorkAllocation;
use crate::core::actions::render_image::render_image::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotKernel, ThreadTint, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::default_thread_count::default_thread_count;

const THREADS: &str = "threads";
const ALLOCATION: &str = "allocation";
const HEIGHT: &str = "height";
const WIDTH: &str = "width";
const PRINT_LEVEL: &str = "print-level";
const OUTPUT: &str = "output";
const ITERATIONS: &str = "iterations";
const PALETTE: &str = "palette";
const NO_TINT: &str = "no-tint";

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_OUTPUT: &str = "mandelbrot.ppm";

/// Everything one CLI invocation needs to render and report.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub thread_count: u32,
    pub allocation: WorkAllocation,
    pub height: u32,
    pub width: u32,
    pub print_level: PrintLevel,
    pub output: PathBuf,
    pub max_iterations: u32,
    pub palette: MandelbrotColourMapKind,
    pub tint: ThreadTint,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count().get(),
            allocation: WorkAllocation::default(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            print_level: PrintLevel::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette: MandelbrotColourMapKind::default(),
            tint: ThreadTint::default(),
        }
    }
}

impl RenderSettings {
    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(self.height, self.width, self.thread_count, self.allocation)
    }

    pub fn kernel(&self) -> Result<MandelbrotKernel, MandelbrotError> {
        MandelbrotKernel::new(self.max_iterations, self.palette, self.tint)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();

        Self {
            thread_count: matches
                .get_one::<u32>(THREADS)
                .copied()
                .unwrap_or(defaults.thread_count),
            allocation: matches
                .get_one::<WorkAllocation>(ALLOCATION)
                .copied()
                .unwrap_or(defaults.allocation),
            height: matches.get_one::<u32>(HEIGHT).copied().unwrap_or(defaults.height),
            width: matches.get_one::<u32>(WIDTH).copied().unwrap_or(defaults.width),
            print_level: matches
                .get_one::<u8>(PRINT_LEVEL)
                .map(|&level| PrintLevel::from(level))
                .unwrap_or(defaults.print_level),
            output: matches
                .get_one::<PathBuf>(OUTPUT)
                .cloned()
                .unwrap_or(defaults.output),
            max_iterations: matches
                .get_one::<u32>(ITERATIONS)
                .copied()
                .unwrap_or(defaults.max_iterations),
            palette: matches
                .get_one::<MandelbrotColourMapKind>(PALETTE)
                .copied()
                .unwrap_or(defaults.palette),
            tint: if matches.get_flag(NO_TINT) {
                ThreadTint::Off
            } else {
                ThreadTint::On
            },
        }
    }
}

pub fn command() -> Command {
    Command::new("mandelbrot_rows")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders the Mandelbrot set by splitting image rows across threads")
        .arg(
            Arg::new(THREADS)
                .long(THREADS)
                .short('t')
                .value_parser(value_parser!(u32).range(1..))
                .help("Number of render threads [default: available parallelism]"),
        )
        .arg(
            Arg::new(ALLOCATION)
                .long(ALLOCATION)
                .short('a')
                .value_parser(|s: &str| s.parse::<WorkAllocation>())
                .help("Row allocation: 'static' (contiguous blocks) or 'dynamic' (interleaved) [default: static]"),
        )
        .arg(
            Arg::new(HEIGHT)
                .long(HEIGHT)
                .short('H')
                .value_parser(value_parser!(u32).range(1..))
                .help("Image height in pixels [default: 720]"),
        )
        .arg(
            Arg::new(WIDTH)
                .long(WIDTH)
                .short('W')
                .value_parser(value_parser!(u32).range(1..))
                .help("Image width in pixels [default: 960]"),
        )
        .arg(
            Arg::new(PRINT_LEVEL)
                .long(PRINT_LEVEL)
                .short('p')
                .value_parser(value_parser!(u8).range(0..=2))
                .help("0: time only, 1: time and pixel count, 2: also the work allocation [default: 2]"),
        )
        .arg(
            Arg::new(OUTPUT)
                .long(OUTPUT)
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Output PPM file [default: mandelbrot.ppm]"),
        )
        .arg(
            Arg::new(ITERATIONS)
                .long(ITERATIONS)
                .short('i')
                .value_parser(value_parser!(u32).range(1..))
                .help("Maximum escape-time iterations per pixel [default: 1000]"),
        )
        .arg(
            Arg::new(PALETTE)
                .long(PALETTE)
                .value_parser(|s: &str| s.parse::<MandelbrotColourMapKind>())
                .help("Colour palette for escaping pixels: 'fire' or 'blue-white' [default: fire]"),
        )
        .arg(
            Arg::new(NO_TINT)
                .long(NO_TINT)
                .action(ArgAction::SetTrue)
                .help("Render the set black instead of tinting it by worker thread"),
        )
}

/// Parses the process arguments, exiting with usage on error.
#[must_use]
pub fn parse_settings() -> RenderSettings {
    RenderSettings::from_matches(&command().get_matches())
}

pub fn try_parse_settings_from<I, T>(args: I) -> Result<RenderSettings, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(RenderSettings::from_matches(&matches))
}
