use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::image::Image;

/// Writes `image` as a binary (P6) PPM.
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&image.to_rgb_bytes())?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &Image, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        debug!("writing {}x{} image to {}", image.width(), image.height(), filepath.display());

        write_ppm(image, BufWriter::new(File::create(filepath)?))
    }
}
