//! spherecast ray caster
//!
//! Casts one ray per pixel from a fixed eye through a viewport, shades the
//! nearest diffuse sphere with ambient, point and directional lights, and
//! encodes the resulting canvas as an XPM image.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod interval;
pub mod lighting;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod tracer;
pub mod vector;
pub mod xpm;

pub use canvas::Canvas;
pub use color::Color;
pub use config::{ConfigError, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use scene::{Light, Scene, Viewport};
pub use sphere::Sphere;
pub use tracer::Tracer;
pub use xpm::{ColorTable, Encoding};
