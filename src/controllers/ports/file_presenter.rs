use std::path::Path;

use crate::core::data::image::Image;

/// Somewhere a finished image can be written to.
pub trait FilePresenterPort {
    fn present(&self, image: &Image, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
