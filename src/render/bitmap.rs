//! RGBA raster buffer with the handful of drawing primitives card styles need.

use std::io::Write;

use super::font;

/// An RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    /// Opaque colour from components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }

    /// Mix towards `other` by `t` in 0..=255.
    #[must_use]
    pub fn blend(self, other: Rgba, t: u8) -> Rgba {
        let mix = |a: u8, b: u8| -> u8 {
            let (a, b, t) = (u32::from(a), u32::from(b), u32::from(t));
            ((a * (255 - t) + b * t) / 255) as u8
        };
        Rgba(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
            mix(self.3, other.3),
        )
    }
}

/// Row-major RGBA8 image.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitmap({}x{})", self.width, self.height)
    }
}

impl Bitmap {
    /// Create a bitmap filled with one colour.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let len = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(len * 4);
        for _ in 0..len {
            pixels.extend_from_slice(&[fill.0, fill.1, fill.2, fill.3]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Colour at a pixel, `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some(Rgba(p[0], p[1], p[2], p[3]))
    }

    /// Set a pixel; coordinates outside the image are clipped.
    pub fn put(&mut self, x: i64, y: i64, colour: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&[colour.0, colour.1, colour.2, colour.3]);
    }

    /// Fill an axis-aligned rectangle, clipped to the image.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, colour: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i64::from(width)).min(i64::from(self.width));
        let y1 = (y + i64::from(height)).min(i64::from(self.height));
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, colour);
            }
        }
    }

    /// Draw a rectangle outline `thickness` pixels wide, inside the given bounds.
    pub fn stroke_rect(&mut self, x: i64, y: i64, width: u32, height: u32, thickness: u32, colour: Rgba) {
        let t = thickness.min(width / 2).min(height / 2);
        self.fill_rect(x, y, width, t, colour);
        self.fill_rect(x, y + i64::from(height) - i64::from(t), width, t, colour);
        self.fill_rect(x, y, t, height, colour);
        self.fill_rect(x + i64::from(width) - i64::from(t), y, t, height, colour);
    }

    /// Draw one line of text with the built-in 5x7 font at an integer scale.
    ///
    /// Returns the width in pixels of what was drawn.
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, colour: Rgba) -> u32 {
        let scale = scale.max(1);
        let mut pen = x;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            pen + i64::from(col * scale),
                            y + row as i64 * i64::from(scale),
                            scale,
                            scale,
                            colour,
                        );
                    }
                }
            }
            pen += i64::from(font::ADVANCE * scale);
        }
        (pen - x) as u32
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()
    }

    /// Encode as PNG into a byte vector.
    pub fn to_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut out = Vec::new();
        self.write_png(&mut out)?;
        Ok(out)
    }
}
