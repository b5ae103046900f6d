use log::{debug, info, warn};
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::io;
use std::num::NonZeroU32;
use std::thread;
use std::time::{Duration, Instant};

use crate::core::actions::partition_rows::partition_rows::{assign_rows, covered_rows};
use crate::core::actions::partition_rows::work_allocation::WorkAllocation;
use crate::core::actions::render_image::ports::escape_time_kernel::EscapeTimeKernel;
use crate::core::actions::render_rows::render_rows::render_rows;
use crate::core::data::colour::ColourSeed;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image::Image;
use crate::core::data::image_size::{ImageSize, ImageSizeError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    ZeroThreads,
    ZeroWidth,
    ZeroHeight,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "thread count must be at least 1"),
            Self::ZeroWidth => write!(f, "image width must be at least 1"),
            Self::ZeroHeight => write!(f, "image height must be at least 1"),
        }
    }
}

impl Error for InvalidConfiguration {}

impl From<ImageSizeError> for InvalidConfiguration {
    fn from(err: ImageSizeError) -> Self {
        match err {
            ImageSizeError::ZeroWidth => Self::ZeroWidth,
            ImageSizeError::ZeroHeight => Self::ZeroHeight,
        }
    }
}

/// Why a single render worker did not finish.
#[derive(Debug)]
pub enum WorkerFailure<KernelFailure> {
    Kernel(KernelFailure),
    Panicked(String),
    Spawn(io::Error),
}

impl<KernelFailure: Error> fmt::Display for WorkerFailure<KernelFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kernel(err) => write!(f, "kernel error: {}", err),
            Self::Panicked(message) => write!(f, "worker panicked: {}", message),
            Self::Spawn(err) => write!(f, "could not spawn worker thread: {}", err),
        }
    }
}

impl<KernelFailure: Error + 'static> Error for WorkerFailure<KernelFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kernel(err) => Some(err),
            Self::Panicked(_) => None,
            Self::Spawn(err) => Some(err),
        }
    }
}

#[derive(Debug)]
pub enum RenderImageError<KernelFailure> {
    InvalidConfiguration(InvalidConfiguration),
    RenderFailed {
        thread_id: u32,
        cause: WorkerFailure<KernelFailure>,
    },
}

impl<KernelFailure: Error> fmt::Display for RenderImageError<KernelFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid configuration: {}", err),
            Self::RenderFailed { thread_id, cause } => {
                write!(f, "render failed in worker {}: {}", thread_id, cause)
            }
        }
    }
}

impl<KernelFailure: Error + 'static> Error for RenderImageError<KernelFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::RenderFailed { cause, .. } => Some(cause),
        }
    }
}

impl<KernelFailure> From<InvalidConfiguration> for RenderImageError<KernelFailure> {
    fn from(err: InvalidConfiguration) -> Self {
        Self::InvalidConfiguration(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub height: u32,
    pub width: u32,
    pub thread_count: u32,
    pub allocation: WorkAllocation,
    pub viewport: ComplexRect,
}

impl RenderRequest {
    /// A request over the full-set viewport.
    #[must_use]
    pub fn new(height: u32, width: u32, thread_count: u32, allocation: WorkAllocation) -> Self {
        Self {
            height,
            width,
            thread_count,
            allocation,
            viewport: ComplexRect::full_set(),
        }
    }

    #[must_use]
    pub fn with_viewport(self, viewport: ComplexRect) -> Self {
        Self { viewport, ..self }
    }
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub image: Image,
    pub inside_count: u64,
    /// Inside-set tally of each worker, indexed by thread id.
    pub worker_counts: Vec<u64>,
    pub allocation: WorkAllocation,
    pub thread_count: NonZeroU32,
    pub elapsed: Duration,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Renders a whole image on `request.thread_count` freshly spawned threads.
///
/// Every worker gets exclusive ownership of its rows, renders them into the
/// shared image and returns a private inside-set count. The counts are summed
/// only after all workers have been joined. If any worker fails, every other
/// worker is still joined, the image is dropped and the first failure (by
/// thread id) is returned.
pub fn render_image<K>(
    request: RenderRequest,
    kernel: &K,
) -> Result<RenderOutcome, RenderImageError<K::Failure>>
where
    K: EscapeTimeKernel + Sync,
    K::Failure: Send,
{
    let thread_count =
        NonZeroU32::new(request.thread_count).ok_or(InvalidConfiguration::ZeroThreads)?;
    let size = ImageSize::new(request.width, request.height).map_err(InvalidConfiguration::from)?;
    let allocation = request.allocation;
    let viewport = request.viewport;

    info!(
        "rendering {}x{} image on {} threads with {} allocation",
        size.width(),
        size.height(),
        thread_count,
        allocation
    );

    let start = Instant::now();
    let mut image = Image::new(size);

    let uncovered = size.height() - covered_rows(thread_count, size.height(), allocation);
    if uncovered > 0 {
        debug!("{} trailing rows are not assigned to any thread", uncovered);
    }

    let bands = assign_rows(image.rows_mut(), thread_count, allocation);

    let results: Vec<Result<u64, WorkerFailure<K::Failure>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0u32..)
            .zip(bands)
            .map(|(thread_id, rows)| {
                let seed = ColourSeed::for_thread(thread_id, thread_count.get());
                debug!("worker {} owns {} rows", thread_id, rows.len());

                thread::Builder::new()
                    .name(format!("render-worker-{}", thread_id))
                    .spawn_scoped(scope, move || render_rows(rows, size, viewport, kernel, seed))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle {
                Ok(handle) => match handle.join() {
                    Ok(result) => result.map_err(WorkerFailure::Kernel),
                    Err(payload) => Err(WorkerFailure::Panicked(panic_message(&*payload))),
                },
                Err(err) => Err(WorkerFailure::Spawn(err)),
            })
            .collect()
    });

    let mut worker_counts = Vec::with_capacity(results.len());
    let mut first_failure = None;

    for (thread_id, result) in (0u32..).zip(results) {
        match result {
            Ok(count) => {
                debug!("worker {} found {} pixels inside the set", thread_id, count);
                worker_counts.push(count);
            }
            Err(cause) => {
                warn!("render worker {} failed: {}", thread_id, cause);
                if first_failure.is_none() {
                    first_failure = Some((thread_id, cause));
                }
            }
        }
    }

    if let Some((thread_id, cause)) = first_failure {
        return Err(RenderImageError::RenderFailed { thread_id, cause });
    }

    let inside_count: u64 = worker_counts.iter().sum();
    let elapsed = start.elapsed();

    info!(
        "render finished in {:?}, {} pixels inside the set",
        elapsed, inside_count
    );

    Ok(RenderOutcome {
        image,
        inside_count,
        worker_counts,
        allocation,
        thread_count,
        elapsed,
    })
}
