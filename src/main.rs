use anyhow::Context;
use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherecast::config::RenderConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the render thread pool")?;
    }

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            info!("No scene file given, using the built-in reference scene");
            RenderConfig::default()
        }
    };
    args.apply_overrides(&mut config);

    info!(
        "Image resolution: {}x{}, shading: {:?}, roots: {:?}",
        config.width, config.height, config.options.shading, config.options.roots
    );

    let mut tracer = config.tracer();
    tracer.show_progress = !args.no_progress;

    let canvas = if args.serial {
        info!("Using serial rendering...");
        tracer.render_serial()?
    } else {
        tracer.render()
    };

    args.encoding()
        .save(&canvas, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
