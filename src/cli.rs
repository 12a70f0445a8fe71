use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use spherecast::config::RenderConfig;
use spherecast::lighting::ShadingModel;
use spherecast::sphere::RootSolver;
use spherecast::xpm::Encoding;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Image layout written to the output file
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// C header with XFACE_* arrays
    Xpm1,
    /// Plain "! XPM2" text
    Xpm2,
}

impl From<OutputFormat> for Encoding {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xpm1 => Encoding::Xpm1,
            OutputFormat::Xpm2 => Encoding::Xpm2,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shading {
    /// N·L divided by component counts
    Reference,
    /// N·L divided by vector norms
    Lambertian,
}

impl From<Shading> for ShadingModel {
    fn from(shading: Shading) -> Self {
        match shading {
            Shading::Reference => ShadingModel::Reference,
            Shading::Lambertian => ShadingModel::Lambertian,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Roots {
    /// Real-valued division
    Real,
    /// Floored (integer) division
    Integer,
}

impl From<Roots> for RootSolver {
    fn from(roots: Roots) -> Self {
        match roots {
            Roots::Real => RootSolver::Real,
            Roots::Integer => RootSolver::IntegerDivision,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "spherecast")]
#[command(about = "Ray cast diffuse spheres into an XPM image")]
pub struct Args {
    /// TOML scene file; the built-in reference scene is used when absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Canvas width in pixels, overrides the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels, overrides the scene file
    #[arg(long)]
    pub height: Option<u32>,

    /// Lighting normalisation, overrides the scene file
    #[arg(long)]
    pub shading: Option<Shading>,

    /// Root division for intersections, overrides the scene file
    #[arg(long)]
    pub roots: Option<Roots>,

    /// Output file path
    #[arg(short, long, default_value = "raytracer.xpm")]
    pub output: PathBuf,

    /// Output layout; inferred from the extension when omitted (.h is xpm1)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Number of render threads (defaults to one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Trace on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Apply command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(shading) = self.shading {
            config.options.shading = shading.into();
        }
        if let Some(roots) = self.roots {
            config.options.roots = roots.into();
        }
    }

    /// Encoding requested explicitly or implied by the output extension.
    pub fn encoding(&self) -> Encoding {
        match self.format {
            Some(format) => format.into(),
            None if self.output.extension().is_some_and(|ext| ext == "h") => Encoding::Xpm1,
            None => Encoding::Xpm2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_extension() {
        let args = Args::parse_from(["spherecast", "-o", "scene.h"]);
        assert_eq!(args.encoding(), Encoding::Xpm1);

        let args = Args::parse_from(["spherecast", "-o", "scene.xpm"]);
        assert_eq!(args.encoding(), Encoding::Xpm2);

        let args = Args::parse_from(["spherecast", "-o", "scene.h", "--format", "xpm2"]);
        assert_eq!(args.encoding(), Encoding::Xpm2);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "spherecast",
            "--width",
            "64",
            "--shading",
            "lambertian",
            "--roots",
            "integer",
        ]);
        let mut config = RenderConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!((config.width, config.height), (64, 600));
        assert_eq!(config.options.shading, ShadingModel::Lambertian);
        assert_eq!(config.options.roots, RootSolver::IntegerDivision);
    }
}
