use std::path::Path;

use egui::{Color32, Pos2};

use crate::buffer::{Patch, PixelBuffer};
use crate::color::PixelFormat;
use crate::config::CanvasConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::export::ExportGate;
use crate::geometry::IRect;
use crate::guide::{CircleGuide, LineGuide, RectGuide};
use crate::input::{InputEvent, InputRouter, PointerState};
use crate::raster;

/// Horizontal/vertical nudge applied to the centered canvas placement.
const PLACEMENT_OFFSET_X: i32 = 50;
const PLACEMENT_OFFSET_Y: i32 = -50;

/// Decorative frame drawn around the canvas by the external
/// compositor. Loaded once at canvas creation; a missing asset is a
/// startup-fatal condition.
pub struct Border {
    image: image::RgbaImage,
    rect: IRect,
}

impl Border {
    fn load(path: &Path, canvas_bounds: IRect, offset: i32) -> CanvasResult<Self> {
        let decoded = image::open(path).map_err(|source| CanvasError::BorderLoad {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_image(decoded.to_rgba8(), canvas_bounds, offset))
    }

    /// Place an already-decoded frame, for hosts that run asset
    /// loading through their own pipeline.
    pub fn from_image(image: image::RgbaImage, canvas_bounds: IRect, offset: i32) -> Self {
        let rect = IRect::new(
            canvas_bounds.x - offset,
            canvas_bounds.y - offset,
            image.width() as i32 + offset,
            image.height() as i32 + offset,
        );
        Self { image, rect }
    }

    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }

    /// Screen-space placement, offset outward from the canvas bounds.
    pub fn rect(&self) -> IRect {
        self.rect
    }
}

/// The paint surface: a fixed screen-space bounding rectangle, the
/// owned pixel buffer, the decorative border and the three transient
/// guides. At most one guide is non-zero at a time, matching the tool
/// being dragged.
pub struct Canvas {
    bounds: IRect,
    buffer: PixelBuffer,
    border: Border,
    stroke_size: i32,
    line_guide: LineGuide,
    circle_guide: CircleGuide,
    rect_guide: RectGuide,
}

impl Canvas {
    /// Create the canvas centered on the host window with the fixed
    /// placement nudge, and load the border asset. Fails when the
    /// asset is missing; the caller must abort initialization.
    pub fn new(config: &CanvasConfig, window_size: (i32, i32)) -> CanvasResult<Self> {
        let bounds = Self::placed_bounds(config, window_size);
        let border = Border::load(&config.border_asset, bounds, config.border_offset)?;
        Ok(Self::assemble(config, bounds, border))
    }

    /// Create the canvas with an already-decoded border image.
    pub fn with_border_image(
        config: &CanvasConfig,
        window_size: (i32, i32),
        border_image: image::RgbaImage,
    ) -> Self {
        let bounds = Self::placed_bounds(config, window_size);
        let border = Border::from_image(border_image, bounds, config.border_offset);
        Self::assemble(config, bounds, border)
    }

    fn placed_bounds(config: &CanvasConfig, (window_w, window_h): (i32, i32)) -> IRect {
        IRect::new(
            window_w / 2 - config.width as i32 / 2 + PLACEMENT_OFFSET_X,
            window_h / 2 - config.height as i32 / 2 + PLACEMENT_OFFSET_Y,
            config.width as i32,
            config.height as i32,
        )
    }

    fn assemble(config: &CanvasConfig, bounds: IRect, border: Border) -> Self {
        Self {
            bounds,
            buffer: PixelBuffer::new(config.width, config.height),
            border,
            stroke_size: config.stroke_size,
            line_guide: LineGuide::default(),
            circle_guide: CircleGuide::default(),
            rect_guide: RectGuide::default(),
        }
    }

    pub fn bounds(&self) -> IRect {
        self.bounds
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn line_guide(&self) -> LineGuide {
        self.line_guide
    }

    pub fn circle_guide(&self) -> CircleGuide {
        self.circle_guide
    }

    pub fn rect_guide(&self) -> RectGuide {
        self.rect_guide
    }

    /// Screen position to buffer-local coordinates.
    pub fn to_local(&self, pos: Pos2) -> (i32, i32) {
        (pos.x as i32 - self.bounds.x, pos.y as i32 - self.bounds.y)
    }

    /// Process one pointer event end to end: route it through the drag
    /// state machine, then poll the export gate with the tool that was
    /// active while the event was handled.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        pointer: &PointerState,
        router: &mut InputRouter,
        gate: &mut ExportGate,
    ) -> CanvasResult<()> {
        router.route(event, pointer, self);
        gate.observe_tool(pointer.tool, &self.buffer)?;
        Ok(())
    }

    /// Paint one pencil dab: a brush-sized block at the pointer
    /// position, clipped to the buffer. Successive dabs are not
    /// interpolated, so fast motion leaves gaps.
    pub fn pencil_dab(&mut self, pos: Pos2, pointer: &PointerState) {
        let (x, y) = self.to_local(pos);
        self.buffer
            .fill(IRect::new(x, y, pointer.brush_w, pointer.brush_h), pointer.color);
    }

    pub fn update_rect_guide(&mut self, anchor: Pos2, live: Pos2) {
        self.rect_guide = RectGuide::from_corners(anchor, live);
    }

    pub fn update_circle_guide(&mut self, anchor: Pos2, live: Pos2) {
        self.circle_guide = CircleGuide::from_drag(anchor, live);
    }

    pub fn update_line_guide(&mut self, anchor: Pos2, live: Pos2) {
        self.line_guide = LineGuide::from_drag(anchor, live);
    }

    /// Commit the rectangle guide: fill the guided region with the
    /// draw color, then zero the guide.
    pub fn commit_rect(&mut self, color: Color32) {
        if !self.rect_guide.is_zero() {
            let rect = IRect::new(
                self.rect_guide.x - self.bounds.x,
                self.rect_guide.y - self.bounds.y,
                self.rect_guide.w,
                self.rect_guide.h,
            );
            self.buffer.fill(rect, color);
        }
        self.rect_guide = RectGuide::default();
    }

    /// Commit the circle guide as a filled disk. A circle whose extent
    /// touches or crosses any canvas edge is dropped whole; partial
    /// painting is not implemented. The guide is zeroed either way.
    pub fn commit_circle(&mut self, color: Color32) {
        let guide = std::mem::take(&mut self.circle_guide);
        if guide.is_zero() {
            return;
        }
        if raster::circle_out_of_bounds(&guide, &self.bounds) {
            log::warn!(
                "dropping out-of-bounds circle at ({}, {}) r={}",
                guide.x,
                guide.y,
                guide.r
            );
            return;
        }
        let patch = Patch::disk(guide.r, self.buffer.format(), color);
        let (cx, cy) = (guide.x - self.bounds.x, guide.y - self.bounds.y);
        self.buffer.composite(&patch, cx - guide.r, cy - guide.r);
    }

    /// Commit the line guide: rasterize it into a canvas-sized scratch
    /// layer as stroke-sized blocks, composite the layer onto the
    /// buffer, then zero the guide.
    pub fn commit_line(&mut self, color: Color32) {
        let guide = std::mem::take(&mut self.line_guide);
        if guide.is_zero() {
            return;
        }
        let mut patch = Patch::new(self.buffer.width(), self.buffer.height());
        let packed = self.buffer.format().pack(color);
        let (x1, y1) = (guide.x1 - self.bounds.x, guide.y1 - self.bounds.y);
        let (x2, y2) = (guide.x2 - self.bounds.x, guide.y2 - self.bounds.y);
        for (x, y) in raster::line_points(x1, y1, x2, y2) {
            patch.fill_block(x, y, self.stroke_size, packed);
        }
        self.buffer.composite(&patch, 0, 0);
    }

    /// Read-only view for the external render compositor: buffer
    /// pixels, border placement and the live guides.
    pub fn snapshot(&self) -> CanvasSnapshot<'_> {
        CanvasSnapshot {
            bounds: self.bounds,
            pixels: self.buffer.pixels(),
            format: self.buffer.format(),
            border_image: self.border.image(),
            border_rect: self.border.rect(),
            line_guide: self.line_guide,
            circle_guide: self.circle_guide,
            rect_guide: self.rect_guide,
        }
    }
}

/// Everything the per-frame compositor needs, borrowed immutably.
pub struct CanvasSnapshot<'a> {
    pub bounds: IRect,
    pub pixels: &'a [u32],
    pub format: PixelFormat,
    pub border_image: &'a image::RgbaImage,
    pub border_rect: IRect,
    pub line_guide: LineGuide,
    pub circle_guide: CircleGuide,
    pub rect_guide: RectGuide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;
    use egui::pos2;

    fn test_canvas() -> Canvas {
        let config = CanvasConfig {
            width: 100,
            height: 80,
            ..CanvasConfig::default()
        };
        // 300x300 window puts the canvas bounds at (150, 60).
        Canvas::with_border_image(&config, (300, 300), image::RgbaImage::new(132, 112))
    }

    #[test]
    fn test_placement_is_window_centered_with_offset() {
        let canvas = test_canvas();
        assert_eq!(canvas.bounds(), IRect::new(150, 60, 100, 80));
    }

    #[test]
    fn test_border_sits_outside_the_bounds() {
        let canvas = test_canvas();
        let rect = canvas.border().rect();
        assert_eq!(rect.x, 150 - 16);
        assert_eq!(rect.y, 60 - 16);
    }

    #[test]
    fn test_pencil_dab_paints_local_block() {
        let mut canvas = test_canvas();
        let pointer = PointerState::new(Tool::Pencil, Color32::RED);
        canvas.pencil_dab(pos2(160.0, 70.0), &pointer);

        // Local (10, 10) through (13, 13) with the default 4x4 brush.
        assert_eq!(canvas.buffer().pixel(10, 10), Some(Color32::RED));
        assert_eq!(canvas.buffer().pixel(13, 13), Some(Color32::RED));
        assert_eq!(canvas.buffer().pixel(14, 14), Some(Color32::WHITE));
        assert_eq!(canvas.buffer().pixel(9, 10), Some(Color32::WHITE));
    }

    #[test]
    fn test_commit_rect_fills_and_clears_guide() {
        let mut canvas = test_canvas();
        canvas.update_rect_guide(pos2(160.0, 70.0), pos2(170.0, 75.0));
        canvas.commit_rect(Color32::BLUE);

        assert!(canvas.rect_guide().is_zero());
        assert_eq!(canvas.buffer().pixel(10, 10), Some(Color32::BLUE));
        assert_eq!(canvas.buffer().pixel(19, 14), Some(Color32::BLUE));
        assert_eq!(canvas.buffer().pixel(20, 15), Some(Color32::WHITE));
    }

    #[test]
    fn test_commit_zero_guides_is_a_no_op() {
        let mut canvas = test_canvas();
        canvas.commit_rect(Color32::BLUE);
        canvas.commit_circle(Color32::BLUE);
        canvas.commit_line(Color32::BLUE);
        for y in 0..80 {
            for x in 0..100 {
                assert_eq!(canvas.buffer().pixel(x, y), Some(Color32::WHITE));
            }
        }
    }

    #[test]
    fn test_commit_circle_inside_bounds() {
        let mut canvas = test_canvas();
        // Center at local (50, 40), radius 10: well clear of every edge.
        canvas.update_circle_guide(pos2(200.0, 100.0), pos2(210.0, 100.0));
        canvas.commit_circle(Color32::BLACK);

        assert!(canvas.circle_guide().is_zero());
        assert_eq!(canvas.buffer().pixel(50, 40), Some(Color32::BLACK));
        assert_eq!(canvas.buffer().pixel(50, 31), Some(Color32::BLACK));
        // Outside the disk.
        assert_eq!(canvas.buffer().pixel(62, 40), Some(Color32::WHITE));
    }

    #[test]
    fn test_commit_circle_matches_disk_test_exactly() {
        let mut canvas = test_canvas();
        let r = 10;
        canvas.update_circle_guide(pos2(200.0, 100.0), pos2(210.0, 100.0));
        canvas.commit_circle(Color32::BLACK);

        // Patch spans local (40, 30) to (59, 49); compare every buffer
        // pixel against the distance test relative to local (50, 40).
        for y in 0..80 {
            for x in 0..100 {
                let (dx, dy) = (x - 50, y - 40);
                let in_patch = (40..60).contains(&x) && (30..50).contains(&y);
                let expected = in_patch && raster::disk_contains(dx, dy, r);
                let painted = canvas.buffer().pixel(x, y) == Some(Color32::BLACK);
                assert_eq!(painted, expected, "mismatch at local ({x},{y})");
            }
        }
    }

    #[test]
    fn test_commit_circle_out_of_bounds_is_dropped() {
        let mut canvas = test_canvas();
        // Center near the left edge, radius big enough to cross it.
        canvas.update_circle_guide(pos2(155.0, 100.0), pos2(175.0, 100.0));
        canvas.commit_circle(Color32::BLACK);

        assert!(canvas.circle_guide().is_zero());
        for y in 0..80 {
            for x in 0..100 {
                assert_eq!(canvas.buffer().pixel(x, y), Some(Color32::WHITE));
            }
        }
    }

    #[test]
    fn test_commit_line_paints_stroke_blocks() {
        let mut canvas = test_canvas();
        canvas.update_line_guide(pos2(160.0, 70.0), pos2(170.0, 70.0));
        canvas.commit_line(Color32::GREEN);

        assert!(canvas.line_guide().is_zero());
        // Horizontal run at local y=10, stroke size 2.
        for x in 10..=20 {
            assert_eq!(canvas.buffer().pixel(x, 10), Some(Color32::GREEN));
            assert_eq!(canvas.buffer().pixel(x, 11), Some(Color32::GREEN));
        }
        assert_eq!(canvas.buffer().pixel(10, 12), Some(Color32::WHITE));
        assert_eq!(canvas.buffer().pixel(22, 10), Some(Color32::WHITE));
    }

    #[test]
    fn test_commit_line_off_canvas_portion_is_clipped() {
        let mut canvas = test_canvas();
        // Runs from inside the canvas to well past its right edge.
        canvas.update_line_guide(pos2(240.0, 70.0), pos2(280.0, 70.0));
        canvas.commit_line(Color32::GREEN);

        assert_eq!(canvas.buffer().pixel(90, 10), Some(Color32::GREEN));
        assert_eq!(canvas.buffer().pixel(99, 10), Some(Color32::GREEN));
        // No wraparound onto other rows.
        assert_eq!(canvas.buffer().pixel(0, 11), Some(Color32::WHITE));
        assert_eq!(canvas.buffer().pixel(0, 12), Some(Color32::WHITE));
    }
}
