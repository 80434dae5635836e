use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mandelbrot_explorer::{Command, ExplorerConfig, FrameController, PpmFilePresenter, RenderOutcome, TileExecutor};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ExecutorArg {
    ScopedThreads,
    Rayon,
}

impl From<ExecutorArg> for TileExecutor {
    fn from(arg: ExecutorArg) -> Self {
        match arg {
            ExecutorArg::ScopedThreads => Self::ScopedThreads,
            ExecutorArg::Rayon => Self::Rayon,
        }
    }
}

/// Renders a Mandelbrot view to a PPM image.
///
/// `--commands` replays key presses before rendering: w/a/s/d pan,
/// + or = zooms in, - zooms out, q stops reading further keys.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 1000)]
    height: u32,

    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Number of column tiles computed concurrently.
    #[arg(long, default_value_t = 8)]
    parallelism: usize,

    #[arg(long, value_enum, default_value_t = ExecutorArg::ScopedThreads)]
    executor: ExecutorArg,

    #[arg(long, default_value = "")]
    commands: String,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            parallelism: self.parallelism,
            executor: self.executor.into(),
            ..ExplorerConfig::default()
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let config = args.config();
    let presenter = PpmFilePresenter::new(&args.output);
    let mut controller = FrameController::new(config, presenter)?;

    log::info!(
        "rendering {}x{}, {} iterations, {} tiles ({:?})",
        config.width,
        config.height,
        config.max_iterations,
        config.parallelism,
        config.executor
    );

    for key in args.commands.chars() {
        match Command::from_key(key) {
            Some(Command::Quit) => break,
            Some(command) => controller.apply(command)?,
            None => log::warn!("ignoring unbound key {key:?}"),
        }
    }

    if let RenderOutcome::Presented { duration } = controller.render()? {
        log::info!("duration: {:?}", duration);
    }

    controller.quit();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    run(&args).inspect_err(|err| log::error!("{err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }

    #[test]
    fn test_run_writes_requested_frame() {
        let output = std::env::temp_dir().join(format!("explorer_main_{}.ppm", std::process::id()));
        let args = Args::parse_from([
            "mandelbrot_explorer",
            "--width",
            "32",
            "--height",
            "24",
            "--executor",
            "rayon",
            "--commands",
            "++wdq-",
            "--output",
            output.to_str().unwrap(),
        ]);

        let result = run(&args);
        let written = std::fs::read(&output).unwrap();
        std::fs::remove_file(&output).unwrap();

        assert!(result.is_ok());
        assert!(written.starts_with(b"P6\n32 24\n255\n"));
    }

    #[test]
    fn test_run_rejects_zero_parallelism() {
        let args = Args::parse_from(["mandelbrot_explorer", "--parallelism", "0", "--output", "unused.ppm"]);

        assert!(run(&args).is_err());
    }
}
