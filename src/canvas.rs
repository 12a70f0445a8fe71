//! Raster buffer addressed through a centered coordinate system.
//!
//! Logical coordinates put the origin at the middle of the canvas with x
//! growing rightward and y growing upward. They map to storage as
//!
//! ```text
//! sx = width / 2 + x
//! sy = height / 2 - y - 1
//! index = sy * width + sx
//! ```
//!
//! so storage row 0 is the top of the image. Pixels are only reachable
//! through this mapping; writes that land outside the buffer are rejected.

use rayon::prelude::*;

use crate::color::Color;
use crate::error::{RenderError, RenderResult};

/// A single raster cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Color currently stored in this cell
    pub color: Color,
}

/// Fixed-size grid of pixels, initialised to white.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Create a `width` x `height` canvas filled with white.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Pixel { color: Color::WHITE }; len],
        }
    }

    /// Canvas size as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Overwrite the pixel at logical `(x, y)`.
    pub fn put(&mut self, x: i32, y: i32, color: Color) -> RenderResult<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index].color = color;
        Ok(())
    }

    /// Read the pixel at logical `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> RenderResult<Color> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index].color)
    }

    /// All pixels in storage order, top row first.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    /// Storage rows, top of the image first.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks(0) panics; an empty buffer simply yields no rows
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Logical coordinate of the storage cell `(sx, sy)`.
    pub fn to_logical(&self, sx: u32, sy: u32) -> (i32, i32) {
        let x = sx as i64 - (self.width / 2) as i64;
        let y = (self.height / 2) as i64 - 1 - sy as i64;
        (x as i32, y as i32)
    }

    /// Fill every pixel from `shade(x, y)` in parallel.
    ///
    /// Rows are handed to rayon workers as disjoint slices, so no locking is
    /// needed. `on_row` runs once per finished row.
    pub fn par_fill<F, P>(&mut self, shade: F, on_row: P)
    where
        F: Fn(i32, i32) -> Color + Sync,
        P: Fn() + Sync,
    {
        if self.pixels.is_empty() {
            return;
        }
        let width = self.width;
        let half_width = (self.width / 2) as i64;
        let half_height = (self.height / 2) as i64;

        self.pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(sy, row)| {
                let y = (half_height - 1 - sy as i64) as i32;
                for (sx, pixel) in row.iter_mut().enumerate() {
                    let x = (sx as i64 - half_width) as i32;
                    pixel.color = shade(x, y);
                }
                on_row();
            });
    }

    fn index_of(&self, x: i32, y: i32) -> RenderResult<usize> {
        let sx = (self.width / 2) as i64 + x as i64;
        let sy = (self.height / 2) as i64 - y as i64 - 1;
        if sx < 0 || sy < 0 || sx >= self.width as i64 || sy >= self.height as i64 {
            return Err(RenderError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(sy as usize * self.width as usize + sx as usize)
    }
}
