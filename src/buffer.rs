use std::path::Path;

use egui::Color32;

use crate::color::PixelFormat;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::IRect;
use crate::raster;

/// Fixed-size raster backing store for the canvas.
///
/// Pixels are packed 32-bit values in the buffer's native channel
/// order, row-major. The buffer knows nothing about input or guides;
/// it only fills, writes, composites and exports.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer filled with opaque white. The pixel format is
    /// resolved here, once, and never changes.
    pub fn new(width: usize, height: usize) -> Self {
        let format = PixelFormat::native();
        let white = format.pack(Color32::WHITE);
        Self {
            width,
            height,
            format,
            pixels: vec![white; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw packed pixels, row-major. Read-only; handed to the external
    /// compositor.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn bounds(&self) -> IRect {
        IRect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Overwrite every pixel of `rect` intersected with the buffer
    /// bounds. Clipping is the normal case here, so nothing errors.
    pub fn fill(&mut self, rect: IRect, color: Color32) {
        let clipped = rect.intersect(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        let packed = self.format.pack(color);
        for y in clipped.y..clipped.bottom() {
            let row = y as usize * self.width;
            for x in clipped.x..clipped.right() {
                self.pixels[row + x as usize] = packed;
            }
        }
    }

    /// Write one pixel. Out-of-range coordinates are a caller bug and
    /// are rejected; the buffer is left untouched.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color32) -> CanvasResult<()> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(CanvasError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y as usize * self.width + x as usize] = self.format.pack(color);
        Ok(())
    }

    /// The color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.format.unpack(self.pixels[y as usize * self.width + x as usize]))
    }

    /// Paste a scratch layer onto the buffer with its top-left corner
    /// at `(origin_x, origin_y)`. Transparent patch pixels leave the
    /// buffer untouched; anything hanging over an edge is clipped.
    pub fn composite(&mut self, patch: &Patch, origin_x: i32, origin_y: i32) {
        for py in 0..patch.height as i32 {
            let by = origin_y + py;
            if by < 0 || by as usize >= self.height {
                continue;
            }
            let patch_row = py as usize * patch.width;
            let row = by as usize * self.width;
            for px in 0..patch.width as i32 {
                let bx = origin_x + px;
                if bx < 0 || bx as usize >= self.width {
                    continue;
                }
                let value = patch.pixels[patch_row + px as usize];
                if value == Patch::TRANSPARENT {
                    continue;
                }
                self.pixels[row + bx as usize] = value;
            }
        }
    }

    /// Serialize the full buffer to a PNG file. Synchronous; failures
    /// surface to the caller.
    pub fn export_to(&self, path: &Path) -> CanvasResult<()> {
        let mut out = image::RgbaImage::new(self.width as u32, self.height as u32);
        for (i, &packed) in self.pixels.iter().enumerate() {
            let color = self.format.unpack(packed);
            let x = (i % self.width) as u32;
            let y = (i / self.width) as u32;
            out.put_pixel(x, y, image::Rgba([color.r(), color.g(), color.b(), 0xFF]));
        }
        out.save_with_format(path, image::ImageFormat::Png)?;
        log::info!(
            "exported {}x{} canvas to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Heap-allocated scratch layer for shape commits. A shape is
/// rasterized here first, then composited onto the buffer in one pass;
/// untouched scratch pixels stay transparent.
pub struct Patch {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Patch {
    /// Packed opaque colors always carry a set alpha byte, so zero is
    /// free to mean "not painted".
    pub const TRANSPARENT: u32 = 0;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Self::TRANSPARENT; width * height],
        }
    }

    /// A `2r x 2r` patch holding a filled disk: every patch coordinate
    /// within `radius` of the patch center is painted, the rest stays
    /// transparent.
    pub fn disk(radius: i32, format: PixelFormat, color: Color32) -> Self {
        let diameter = (radius.max(0) * 2) as usize;
        let mut patch = Self::new(diameter, diameter);
        let packed = format.pack(color);
        for y in 0..diameter as i32 {
            for x in 0..diameter as i32 {
                if raster::disk_contains(x - radius, y - radius, radius) {
                    patch.pixels[y as usize * diameter + x as usize] = packed;
                }
            }
        }
        patch
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Paint a `size x size` block with its top-left corner at
    /// `(x, y)`, clipped to the patch.
    pub fn fill_block(&mut self, x: i32, y: i32, size: i32, packed: u32) {
        let bounds = IRect::new(0, 0, self.width as i32, self.height as i32);
        let clipped = IRect::new(x, y, size, size).intersect(&bounds);
        if clipped.is_empty() {
            return;
        }
        for by in clipped.y..clipped.bottom() {
            let row = by as usize * self.width;
            for bx in clipped.x..clipped.right() {
                self.pixels[row + bx as usize] = packed;
            }
        }
    }

    /// The packed value at `(x, y)`, or `None` outside the patch.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }
}
