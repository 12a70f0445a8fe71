//! XPM image encoding.
//!
//! A canvas is serialised in two steps. First a [`ColorTable`] assigns every
//! distinct color a small integer code, in the order the colors are first
//! seen while scanning pixels in storage order. Then each pixel is emitted as
//! its code, zero-padded to a fixed width so rows need no separators.
//!
//! Two layouts are supported:
//! - [`Encoding::Xpm1`]: `#define` header plus C string arrays, suitable for
//!   embedding in a C header.
//! - [`Encoding::Xpm2`]: the plain `! XPM2` text format.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::RenderResult;

/// Output layout for [`Encoding::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// C-header style with `XFACE_*` defines and quoted rows.
    Xpm1,
    /// Standalone `! XPM2` text image.
    Xpm2,
}

/// Deduplicated color legend for one canvas.
///
/// Codes are assigned sequentially from 0 in first-seen order, keyed on the
/// clamped `rrggbb` string of each pixel.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    codes: HashMap<String, usize>,
    colors: Vec<String>,
}

impl ColorTable {
    /// Scan `canvas` in storage order and build its legend.
    pub fn build(canvas: &Canvas) -> Self {
        Self::index(canvas).0
    }

    /// Build the legend and return the code of every pixel alongside it.
    fn index(canvas: &Canvas) -> (Self, Vec<usize>) {
        let mut table = ColorTable::default();
        let codes = canvas
            .pixels()
            .map(|pixel| table.intern(pixel.color.to_hex()))
            .collect();

        info!("Number of unique colors: {}", table.len());
        debug!(
            "Colors: {:?}",
            table.colors.iter().map(|c| format!("#{}", c)).collect::<Vec<_>>()
        );
        (table, codes)
    }

    fn intern(&mut self, hex: String) -> usize {
        if let Some(&code) = self.codes.get(&hex) {
            return code;
        }
        let code = self.colors.len();
        self.colors.push(hex.clone());
        self.codes.insert(hex, code);
        code
    }

    /// Code assigned to a `rrggbb` color, if it appears in the canvas.
    pub fn code_of(&self, hex: &str) -> Option<usize> {
        self.codes.get(hex).copied()
    }

    /// `rrggbb` color behind a code.
    pub fn color_of(&self, code: usize) -> Option<&str> {
        self.colors.get(code).map(String::as_str)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the canvas had no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Digits each pixel code is padded to.
    pub fn chars_needed(&self) -> usize {
        chars_needed(self.len())
    }

    /// `(code, rrggbb)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.colors.iter().map(String::as_str).enumerate()
    }
}

/// Number of decimal digits in `count`; zero colors need zero digits.
pub fn chars_needed(count: usize) -> usize {
    let mut digits = 0;
    let mut remaining = count;
    while remaining > 0 {
        digits += 1;
        remaining /= 10;
    }
    digits
}

impl Encoding {
    /// Serialise `canvas` into a complete document.
    pub fn encode(self, canvas: &Canvas) -> String {
        let (table, codes) = ColorTable::index(canvas);
        let chars = table.chars_needed();
        let (width, height) = canvas.dimensions();

        let rows = pixel_rows(&codes, width as usize, chars);
        match self {
            Encoding::Xpm1 => {
                let colors: Vec<String> = table
                    .iter()
                    .map(|(code, hex)| format!("\"{:0chars$}\", \"#{}\"", code, hex))
                    .collect();
                let rows: Vec<String> = rows.iter().map(|row| format!("\"{}\"", row)).collect();
                format!(
                    "#define XFACE_format 1\n\
                     #define XFACE_width {}\n\
                     #define XFACE_height {}\n\
                     #define XFACE_ncolors {}\n\
                     #define XFACE_chars_per_pixel {}\n\
                     static char *XFACE_colors[] = {{\n{}\n}};\n\
                     static char *XFACE_pixels[] = {{\n{}\n}};",
                    width,
                    height,
                    table.len(),
                    chars,
                    colors.join(",\n"),
                    rows.join(",\n"),
                )
            }
            Encoding::Xpm2 => {
                let colors: Vec<String> = table
                    .iter()
                    .map(|(code, hex)| format!("{:0chars$} c #{}", code, hex))
                    .collect();
                format!(
                    "! XPM2\n{} {} {} {}\n{}\n{}",
                    width,
                    height,
                    table.len(),
                    chars,
                    colors.join("\n"),
                    rows.join("\n"),
                )
            }
        }
    }

    /// Stream the encoded canvas into `writer`.
    pub fn write_to<W: Write>(self, canvas: &Canvas, writer: &mut W) -> RenderResult<()> {
        writer.write_all(self.encode(canvas).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Encode `canvas` into the file at `path`, replacing it if present.
    pub fn save<P: AsRef<Path>>(self, canvas: &Canvas, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(canvas, &mut writer)?;
        info!("Image saved as {} ({:?})", path.display(), self);
        Ok(())
    }
}

/// Concatenate zero-padded codes row by row.
fn pixel_rows(codes: &[usize], width: usize, chars: usize) -> Vec<String> {
    if codes.is_empty() {
        return Vec::new();
    }
    codes
        .chunks(width)
        .map(|row| {
            let mut line = String::with_capacity(row.len() * chars);
            for code in row {
                line.push_str(&format!("{:0chars$}", code));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const RED: Color = Color::new(255.0, 0.0, 0.0);
    const GREEN: Color = Color::new(0.0, 255.0, 0.0);

    /// 2x2 canvas: white top row, red bottom row.
    fn two_by_two() -> Canvas {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(-1, -1, RED).unwrap();
        canvas.put(0, -1, RED).unwrap();
        canvas
    }

    #[test]
    fn test_chars_needed() {
        assert_eq!(chars_needed(0), 0);
        assert_eq!(chars_needed(1), 1);
        assert_eq!(chars_needed(9), 1);
        assert_eq!(chars_needed(10), 2);
        assert_eq!(chars_needed(100), 3);
    }

    #[test]
    fn test_color_table_first_seen_order() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(-1, 0, GREEN).unwrap();
        canvas.put(0, -1, RED).unwrap();

        let table = ColorTable::build(&canvas);
        assert_eq!(table.len(), 3);
        assert_eq!(table.code_of("00ff00"), Some(0));
        assert_eq!(table.code_of("ffffff"), Some(1));
        assert_eq!(table.code_of("ff0000"), Some(2));
        assert_eq!(table.color_of(2), Some("ff0000"));
        assert_eq!(table.color_of(3), None);
    }

    #[test]
    fn test_color_table_is_injective() {
        let mut canvas = Canvas::new(4, 4);
        let palette = [
            RED,
            GREEN,
            Color::new(255.4, 0.0, 0.0),
            Color::new(300.0, -5.0, 0.0),
            Color::new(12.0, 34.0, 56.0),
        ];
        for (i, color) in palette.iter().enumerate() {
            let (sx, sy) = ((i % 4) as u32, (i / 4) as u32);
            let (x, y) = canvas.to_logical(sx, sy);
            canvas.put(x, y, *color).unwrap();
            let (x, y) = canvas.to_logical(sx, sy + 2);
            canvas.put(x, y, *color).unwrap();
        }

        let (table, codes) = ColorTable::index(&canvas);
        let hexes: Vec<String> = canvas.pixels().map(|p| p.color.to_hex()).collect();
        for (a, code_a) in codes.iter().enumerate() {
            for (b, code_b) in codes.iter().enumerate() {
                assert_eq!(hexes[a] == hexes[b], code_a == code_b);
            }
        }
        // RED, its sub-integer twin and the over-bright variant collapse
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_xpm2_two_by_two() {
        let encoded = Encoding::Xpm2.encode(&two_by_two());
        assert_eq!(
            encoded,
            "! XPM2\n2 2 2 1\n0 c #ffffff\n1 c #ff0000\n00\n11"
        );
    }

    #[test]
    fn test_xpm1_two_by_two() {
        let encoded = Encoding::Xpm1.encode(&two_by_two());
        let expected = "#define XFACE_format 1\n\
                        #define XFACE_width 2\n\
                        #define XFACE_height 2\n\
                        #define XFACE_ncolors 2\n\
                        #define XFACE_chars_per_pixel 1\n\
                        static char *XFACE_colors[] = {\n\
                        \"0\", \"#ffffff\",\n\
                        \"1\", \"#ff0000\"\n\
                        };\n\
                        static char *XFACE_pixels[] = {\n\
                        \"00\",\n\
                        \"11\"\n\
                        };";
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_codes_are_zero_padded() {
        let mut canvas = Canvas::new(4, 4);
        for i in 0..10 {
            let (x, y) = canvas.to_logical(i % 4, i / 4);
            canvas.put(x, y, Color::new(i as f64, 0.0, 0.0)).unwrap();
        }
        let encoded = Encoding::Xpm2.encode(&canvas);
        let lines: Vec<&str> = encoded.lines().collect();
        // ten shades of red plus the white background
        assert_eq!(lines[1], "4 4 11 2");
        assert_eq!(lines[2], "00 c #000000");
        assert_eq!(lines[12], "10 c #ffffff");
        assert_eq!(lines[13], "00010203");
        assert_eq!(lines[16], "10101010");
    }

    #[test]
    fn test_empty_canvas_encodes() {
        let canvas = Canvas::new(0, 0);
        assert!(ColorTable::build(&canvas).is_empty());
        assert_eq!(Encoding::Xpm2.encode(&canvas), "! XPM2\n0 0 0 0\n\n");
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xpm");
        Encoding::Xpm2.save(&two_by_two(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("! XPM2\n2 2 2 1\n"));
    }

    #[test]
    fn test_save_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xpm");
        let err = Encoding::Xpm2.save(&two_by_two(), &path).unwrap_err();
        assert!(matches!(err, crate::error::RenderError::Io(_)));
    }
}
