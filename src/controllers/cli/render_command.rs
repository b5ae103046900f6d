use std::error::Error;
use std::io::Write;

use log::info;

use crate::controllers::cli::args::RenderSettings;
use crate::controllers::cli::report::RenderReport;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_image::render_image::render_image;

pub struct RenderCommand<P: FilePresenterPort> {
    presenter: P,
    settings: RenderSettings,
}

impl<P: FilePresenterPort> RenderCommand<P> {
    pub fn new(presenter: P, settings: RenderSettings) -> Self {
        Self {
            presenter,
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Renders, hands the image to the presenter and writes the report to `out`.
    pub fn run<W: Write>(&self, out: W) -> Result<RenderReport, Box<dyn Error>> {
        let kernel = self.settings.kernel()?;
        let outcome = render_image(self.settings.render_request(), &kernel)?;

        self.presenter.present(&outcome.image, &self.settings.output)?;
        info!("saved to {}", self.settings.output.display());

        let report = RenderReport::from(&outcome);
        report.write_to(self.settings.print_level, out)?;

        Ok(report)
    }
}
