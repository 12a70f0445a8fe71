//! Render configuration and TOML scene files.
//!
//! A [`RenderConfig`] bundles everything the tracer needs: canvas size,
//! viewport, trace options and the scene itself. It is built once and passed
//! by reference; nothing here is global.
//!
//! Scene files look like this (every table is optional and falls back to the
//! built-in reference scene):
//!
//! ```toml
//! [canvas]
//! width = 600
//! height = 600
//!
//! [viewport]
//! width = 1.0
//! height = 1.0
//! distance = 1.0
//!
//! [trace]
//! t_min = 1.0
//! t_max = inf
//! shading = "reference"   # or "lambertian"
//! roots = "real"          # or "integer"
//! background = [255, 255, 255]
//!
//! [[spheres]]
//! center = [0, -1, 3]
//! radius = 1
//! color = [255, 0, 0]
//!
//! [[lights]]
//! kind = "point"
//! intensity = 0.6
//! position = [2, 1, 0]
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::color::Color;
use crate::error::RenderError;
use crate::interval::Interval;
use crate::lighting::ShadingModel;
use crate::scene::{Light, Scene, Viewport};
use crate::sphere::{RootSolver, Sphere};
use crate::tracer::{TraceOptions, Tracer};
use crate::vector::{to_vector3, Vector3};

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Viewport the canvas is projected onto
    pub viewport: Viewport,
    /// Trace bounds, shading and root options
    pub options: TraceOptions,
    /// Spheres, lights and background
    pub scene: Scene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            viewport: Viewport::default(),
            options: TraceOptions::default(),
            scene: Scene::reference(),
        }
    }
}

impl RenderConfig {
    /// Load and validate a TOML scene file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading scene from {}", path.display());
        let toml_str = fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str)
    }

    /// Parse and validate a TOML scene document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let file: SceneFile = toml::from_str(toml_str)?;
        let config = file.into_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the tracer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewport = &self.viewport;
        if ![viewport.width, viewport.height, viewport.distance]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::Validation(
                "viewport dimensions must be finite".to_string(),
            ));
        }

        let bounds = self.options.bounds;
        if bounds.min.is_nan() || bounds.max.is_nan() || bounds.is_empty() {
            return Err(ConfigError::Validation(format!(
                "t_min ({}) must be less than t_max ({})",
                bounds.min, bounds.max
            )));
        }

        for (i, sphere) in self.scene.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(ConfigError::Validation(format!(
                    "sphere {} has non-positive radius {}",
                    i, sphere.radius
                )));
            }
            if !sphere.center.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "sphere {} has a non-finite center",
                    i
                )));
            }
        }

        for (i, light) in self.scene.lights.iter().enumerate() {
            let intensity = light.intensity();
            if !(intensity >= 0.0 && intensity.is_finite()) {
                return Err(ConfigError::Validation(format!(
                    "light {} has invalid intensity {}",
                    i, intensity
                )));
            }
            let finite = match *light {
                Light::Ambient { .. } => true,
                Light::Point { position, .. } => position.is_finite(),
                Light::Directional { direction, .. } => direction.is_finite(),
            };
            if !finite {
                return Err(ConfigError::Validation(format!(
                    "light {} has non-finite coordinates",
                    i
                )));
            }
        }

        if self.scene.spheres.is_empty() {
            warn!("Scene has no spheres, the image will be plain background");
        } else if self.scene.lights.is_empty() {
            warn!("Scene has no lights, every sphere will render black");
        }
        Ok(())
    }

    /// Tracer borrowing this configuration.
    pub fn tracer(&self) -> Tracer<'_> {
        Tracer {
            scene: &self.scene,
            viewport: self.viewport,
            width: self.width,
            height: self.height,
            options: self.options,
            show_progress: false,
        }
    }
}

/// Failures loading a scene file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unexpected fields.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// A vector or color has the wrong number of components.
    #[error("Invalid vector in configuration: {0}")]
    Vector(#[from] RenderError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    canvas: CanvasSection,
    #[serde(default)]
    viewport: ViewportSection,
    #[serde(default)]
    trace: TraceSection,
    spheres: Option<Vec<SphereSection>>,
    lights: Option<Vec<LightSection>>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CanvasSection {
    width: u32,
    height: u32,
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ViewportSection {
    width: f64,
    height: f64,
    distance: f64,
}

impl Default for ViewportSection {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: viewport.width,
            height: viewport.height,
            distance: viewport.distance,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TraceSection {
    t_min: f64,
    t_max: f64,
    shading: ShadingModel,
    roots: RootSolver,
    background: Option<Vec<f64>>,
}

impl Default for TraceSection {
    fn default() -> Self {
        let bounds = Interval::default();
        Self {
            t_min: bounds.min,
            t_max: bounds.max,
            shading: ShadingModel::default(),
            roots: RootSolver::default(),
            background: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereSection {
    center: Vec<f64>,
    radius: f64,
    color: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LightKind {
    Ambient,
    Point,
    Directional,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LightSection {
    kind: LightKind,
    intensity: f64,
    position: Option<Vec<f64>>,
    direction: Option<Vec<f64>>,
}

fn to_color(v: &[f64]) -> Result<Color, RenderError> {
    let rgb: Vector3 = to_vector3(v)?;
    Ok(Color::new(rgb.x, rgb.y, rgb.z))
}

impl LightSection {
    fn into_light(self, index: usize) -> Result<Light, ConfigError> {
        let missing = |field: &str| {
            ConfigError::Validation(format!("light {} ({:?}) needs a {}", index, self.kind, field))
        };
        let light = match self.kind {
            LightKind::Ambient => Light::Ambient {
                intensity: self.intensity,
            },
            LightKind::Point => Light::Point {
                intensity: self.intensity,
                position: to_vector3(self.position.as_deref().ok_or_else(|| missing("position"))?)?,
            },
            LightKind::Directional => Light::Directional {
                intensity: self.intensity,
                direction: to_vector3(
                    self.direction.as_deref().ok_or_else(|| missing("direction"))?,
                )?,
            },
        };
        Ok(light)
    }
}

impl SceneFile {
    fn into_config(self) -> Result<RenderConfig, ConfigError> {
        let reference = Scene::reference();

        let spheres = match self.spheres {
            Some(spheres) => spheres
                .into_iter()
                .map(|s| -> Result<Sphere, ConfigError> {
                    Ok(Sphere::new(
                        to_vector3(&s.center)?,
                        s.radius,
                        to_color(&s.color)?,
                    ))
                })
                .collect::<Result<Vec<_>, ConfigError>>()?,
            None => reference.spheres,
        };

        let lights = match self.lights {
            Some(lights) => lights
                .into_iter()
                .enumerate()
                .map(|(i, l)| l.into_light(i))
                .collect::<Result<Vec<_>, ConfigError>>()?,
            None => reference.lights,
        };

        let background = match self.trace.background {
            Some(rgb) => to_color(&rgb)?,
            None => reference.background,
        };

        Ok(RenderConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            viewport: Viewport {
                width: self.viewport.width,
                height: self.viewport.height,
                distance: self.viewport.distance,
            },
            options: TraceOptions {
                bounds: Interval::new(self.trace.t_min, self.trace.t_max),
                shading: self.trace.shading,
                roots: self.trace.roots,
            },
            scene: Scene {
                spheres,
                lights,
                background,
            },
        })
    }
}
