use mandelbrot_rows::{PpmFilePresenter, RenderCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = mandelbrot_rows::parse_settings();
    let command = RenderCommand::new(PpmFilePresenter::new(), settings);

    command.run(std::io::stdout().lock())?;

    Ok(())
}
