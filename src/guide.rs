//! Transient preview shapes tracking a pointer drag.
//!
//! A guide is recomputed from the drag anchor and the live pointer
//! position on every in-canvas move, and cleared to its zero value as
//! soon as it is committed or the drag ends. Guides live in screen
//! space; conversion to buffer coordinates happens at commit time.

use egui::Pos2;

/// Candidate line, screen-space endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineGuide {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Candidate circle: screen-space center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleGuide {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

/// Candidate rectangle: screen-space top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectGuide {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl LineGuide {
    /// Endpoints are the anchor and the live pointer, verbatim.
    pub fn from_drag(anchor: Pos2, live: Pos2) -> Self {
        Self {
            x1: anchor.x as i32,
            y1: anchor.y as i32,
            x2: live.x as i32,
            y2: live.y as i32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl CircleGuide {
    /// Center is the anchor; the radius tracks only the horizontal
    /// distance to the pointer, not the Euclidean distance.
    pub fn from_drag(anchor: Pos2, live: Pos2) -> Self {
        Self {
            x: anchor.x as i32,
            y: anchor.y as i32,
            r: (anchor.x as i32 - live.x as i32).abs(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl RectGuide {
    /// Axis-aligned rectangle spanned by the anchor and the live
    /// pointer. The origin is the componentwise minimum, so all four
    /// drag directions produce non-negative width and height; a
    /// zero-delta axis keeps the anchor coordinate.
    pub fn from_corners(anchor: Pos2, live: Pos2) -> Self {
        let (ax, ay) = (anchor.x as i32, anchor.y as i32);
        let (lx, ly) = (live.x as i32, live.y as i32);
        Self {
            x: ax.min(lx),
            y: ay.min(ly),
            w: (lx - ax).abs(),
            h: (ly - ay).abs(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_rect_guide_drag_up_right() {
        let guide = RectGuide::from_corners(pos2(100.0, 100.0), pos2(150.0, 80.0));
        assert_eq!(guide, RectGuide { x: 100, y: 80, w: 50, h: 20 });
    }

    #[test]
    fn test_rect_guide_drag_down_left() {
        let guide = RectGuide::from_corners(pos2(100.0, 100.0), pos2(60.0, 140.0));
        assert_eq!(guide, RectGuide { x: 60, y: 100, w: 40, h: 40 });
    }

    #[test]
    fn test_rect_guide_zero_delta() {
        let guide = RectGuide::from_corners(pos2(100.0, 100.0), pos2(100.0, 100.0));
        assert_eq!(guide, RectGuide { x: 100, y: 100, w: 0, h: 0 });
    }

    #[test]
    fn test_rect_guide_all_sign_combinations() {
        let anchor = pos2(10.0, 10.0);
        for (px, py) in [(15, 15), (5, 15), (15, 5), (5, 5)] {
            let guide = RectGuide::from_corners(anchor, pos2(px as f32, py as f32));
            assert_eq!(guide.w, 5);
            assert_eq!(guide.h, 5);
            assert_eq!(guide.x, 10.min(px));
            assert_eq!(guide.y, 10.min(py));
        }
    }

    #[test]
    fn test_circle_guide_radius_is_horizontal_only() {
        let guide = CircleGuide::from_drag(pos2(100.0, 100.0), pos2(130.0, 500.0));
        assert_eq!(guide, CircleGuide { x: 100, y: 100, r: 30 });

        // Dragging left gives the same radius.
        let guide = CircleGuide::from_drag(pos2(100.0, 100.0), pos2(70.0, 100.0));
        assert_eq!(guide.r, 30);
    }

    #[test]
    fn test_line_guide_endpoints_verbatim() {
        let guide = LineGuide::from_drag(pos2(3.0, 4.0), pos2(9.0, 1.0));
        assert_eq!(guide, LineGuide { x1: 3, y1: 4, x2: 9, y2: 1 });
    }

    #[test]
    fn test_zero_value_is_inactive() {
        assert!(LineGuide::default().is_zero());
        assert!(CircleGuide::default().is_zero());
        assert!(RectGuide::default().is_zero());
        assert!(!RectGuide { x: 0, y: 0, w: 1, h: 0 }.is_zero());
    }
}
