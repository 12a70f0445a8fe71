//! Per-pixel ray casting.
//!
//! For every canvas pixel the tracer builds a ray from the eye through the
//! matching viewport cell, finds the nearest sphere hit within the trace
//! bounds, lights it and writes the clamped result into the canvas. Pixels
//! are independent, so [`Tracer::render`] shades rows on all rayon workers.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::RenderResult;
use crate::interval::Interval;
use crate::lighting::{compute_lighting, ShadingModel};
use crate::ray::Ray;
use crate::scene::{Scene, Viewport};
use crate::sphere::{RootSolver, Sphere};
use crate::vector::Vector3;

/// Eye position shared by every primary ray.
pub const EYE: Vector3 = Vector3::ZERO;

/// Knobs controlling how rays are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraceOptions {
    /// Accepted ray parameters, both bounds exclusive
    pub bounds: Interval,
    /// Normalisation used by the lighting model
    pub shading: ShadingModel,
    /// Division used when solving for intersection roots
    pub roots: RootSolver,
}

/// Nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Sphere that was hit
    pub sphere: &'a Sphere,
}

/// Casts rays from [`EYE`] through a viewport into a scene.
#[derive(Debug, Clone)]
pub struct Tracer<'a> {
    /// Scene being rendered
    pub scene: &'a Scene,
    /// Viewport the canvas maps onto
    pub viewport: Viewport,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Bounds, shading and root options
    pub options: TraceOptions,
    /// Draw a progress bar while rendering
    pub show_progress: bool,
}

impl<'a> Tracer<'a> {
    /// Tracer for `scene` with default viewport and options.
    pub fn new(scene: &'a Scene, width: u32, height: u32) -> Self {
        Self {
            scene,
            viewport: Viewport::default(),
            width,
            height,
            options: TraceOptions::default(),
            show_progress: false,
        }
    }

    /// Render the scene, shading canvas rows in parallel.
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        info!(
            "Tracing {}x{} pixels against {} spheres and {} lights on {} threads",
            self.width,
            self.height,
            self.scene.spheres.len(),
            self.scene.lights.len(),
            rayon::current_num_threads()
        );

        let start = Instant::now();
        let pb = self.progress_bar();
        canvas.par_fill(|x, y| self.shade_pixel(x, y), || pb.inc(1));
        pb.finish_and_clear();

        info!("Image traced in {:.2?}", start.elapsed());
        canvas
    }

    /// Render the scene on the calling thread, one `put` per pixel.
    pub fn render_serial(&self) -> RenderResult<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height);
        let start = Instant::now();
        let pb = self.progress_bar();

        for sy in 0..self.height {
            for sx in 0..self.width {
                let (x, y) = canvas.to_logical(sx, sy);
                canvas.put(x, y, self.shade_pixel(x, y))?;
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!("Image traced serially in {:.2?}", start.elapsed());
        Ok(canvas)
    }

    /// Clamped color for the logical pixel `(x, y)`.
    pub fn shade_pixel(&self, x: i32, y: i32) -> Color {
        let ray = Ray::new(EYE, self.canvas_to_viewport(x, y));
        self.trace_ray(&ray).clamp()
    }

    /// Direction from the eye through the viewport cell of pixel `(x, y)`.
    pub fn canvas_to_viewport(&self, x: i32, y: i32) -> Vector3 {
        Vector3::new(
            x as f64 * self.viewport.width / self.width as f64,
            y as f64 * self.viewport.height / self.height as f64,
            self.viewport.distance,
        )
    }

    /// Color seen along `ray`, unclamped.
    ///
    /// Rays that hit nothing return the scene background without lighting.
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        let Some(hit) = self.closest_hit(ray) else {
            return self.scene.background;
        };

        let position = ray.at(hit.t);
        let normal = hit.sphere.normal_at(position);
        let intensity = compute_lighting(
            position,
            normal,
            &self.scene.lights,
            self.options.shading,
        );
        hit.sphere.color.scale(intensity)
    }

    /// Nearest sphere hit strictly inside the trace bounds.
    ///
    /// On equal parameters the sphere listed first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        let scene: &'a Scene = self.scene;
        let bounds = self.options.bounds;
        let mut closest: Option<Hit<'a>> = None;
        let mut closest_t = f64::INFINITY;

        for sphere in &scene.spheres {
            let (t1, t2) = sphere.intersect(ray, self.options.roots);
            for t in [t1, t2] {
                if bounds.surrounds(t) && t < closest_t {
                    closest_t = t;
                    closest = Some(Hit { t, sphere });
                }
            }
        }

        closest
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.height as u64);
        let style = ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} rows ETA: {eta}")
            .unwrap_or_else(|e| {
                debug!("Falling back to default progress style: {}", e);
                ProgressStyle::default_bar()
            });
        pb.set_style(style);
        pb
    }
}
