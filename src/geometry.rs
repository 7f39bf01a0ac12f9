use egui::{Pos2, Rect};

/// Axis-aligned integer rectangle. `x`/`y` is the top-left corner;
/// width and height are never negative for rectangles produced by this
/// module's constructors, but `is_empty` tolerates degenerate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Truncate a screen-space float rect to integer pixels.
    pub fn from_screen(rect: Rect) -> Self {
        Self {
            x: rect.min.x as i32,
            y: rect.min.y as i32,
            w: rect.width() as i32,
            h: rect.height() as i32,
        }
    }

    pub fn to_screen(&self) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.x as f32, self.y as f32),
            egui::vec2(self.w as f32, self.h as f32),
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True if the two rectangles overlap by at least one pixel.
    pub fn intersects(&self, other: &IRect) -> bool {
        !self.intersect(other).is_empty()
    }

    /// The overlapping region of two rectangles; empty when disjoint.
    pub fn intersect(&self, other: &IRect) -> IRect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        IRect::new(x, y, right - x, bottom - y)
    }
}

/// -1, 0 or 1 matching the sign of `v`.
pub fn sign(v: i32) -> i32 {
    match v {
        0 => 0,
        v if v < 0 => -1,
        _ => 1,
    }
}
