//! Stateless rasterization primitives.
//!
//! Everything here is pure integer math over coordinates; painting the
//! resulting points is the buffer's job.

use crate::geometry::{sign, IRect};
use crate::guide::CircleGuide;

/// Discrete points of the line from `(x1, y1)` to `(x2, y2)`,
/// inclusive of both endpoints, using an incremental integer error
/// accumulator. Horizontal, vertical, shallow and steep runs each get
/// their own stepping axis.
///
/// Endpoints are canonicalized before stepping so that rasterizing
/// A->B returns exactly the reversed point sequence of B->A.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if (x2, y2) < (x1, y1) {
        let mut points = line_points(x2, y2, x1, y1);
        points.reverse();
        return points;
    }

    let dx = x2 - x1;
    let dy = y2 - y1;
    let inc_x = sign(dx);
    let inc_y = sign(dy);
    let dx = dx.abs();
    let dy = dy.abs();

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    if dy == 0 {
        // horizontal run
        let mut x = x1;
        loop {
            points.push((x, y1));
            if x == x2 {
                break;
            }
            x += inc_x;
        }
    } else if dx == 0 {
        // vertical run
        let mut y = y1;
        loop {
            points.push((x1, y));
            if y == y2 {
                break;
            }
            y += inc_y;
        }
    } else if dx >= dy {
        // shallow: step on x, accumulate y error
        let slope = 2 * dy;
        let mut error = -dx;
        let mut y = y1;
        let mut x = x1;
        loop {
            points.push((x, y));
            if x == x2 {
                break;
            }
            x += inc_x;
            error += slope;
            if error >= 0 {
                y += inc_y;
                error -= 2 * dx;
            }
        }
    } else {
        // steep: step on y, accumulate x error
        let slope = 2 * dx;
        let mut error = -dy;
        let mut x = x1;
        let mut y = y1;
        loop {
            points.push((x, y));
            if y == y2 {
                break;
            }
            y += inc_y;
            error += slope;
            if error >= 0 {
                x += inc_x;
                error -= 2 * dy;
            }
        }
    }

    points
}

/// Outline points of the circle centered at `(cx, cy)` with the given
/// radius, generated with the midpoint recurrence and emitted with
/// 8-way symmetry. Radius zero is a single center point. Octant
/// boundaries may repeat a point; callers treating the result as a set
/// are unaffected.
///
/// Preview only; committed circles go through [`disk_contains`].
pub fn circle_outline_points(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    if radius <= 0 {
        return vec![(cx, cy)];
    }

    let mut points = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut error = 1 - radius;

    while y <= x {
        points.extend_from_slice(&[
            (cx + x, cy - y),
            (cx + x, cy + y),
            (cx - x, cy - y),
            (cx - x, cy + y),
            (cx + y, cy - x),
            (cx + y, cy + x),
            (cx - y, cy - x),
            (cx - y, cy + x),
        ]);

        y += 1;
        if error < 0 {
            error += 2 * y + 1;
        } else {
            x -= 1;
            error += 2 * (y - x) + 1;
        }
    }

    points
}

/// Disk membership test used when committing a circle: true when
/// `(dx, dy)` lies within `radius` of the center, boundary inclusive.
pub fn disk_contains(dx: i32, dy: i32, radius: i32) -> bool {
    dx * dx + dy * dy <= radius * radius
}

/// Classify a circle guide against the canvas bounds before commit.
///
/// A circle whose cardinal extent touches or crosses any canvas edge
/// counts as out of bounds and is dropped whole; partial painting is
/// not implemented. The comparisons are inclusive on every edge, so an
/// edge-touching circle is rejected too; that boundary choice is
/// deliberate policy.
pub fn circle_out_of_bounds(circle: &CircleGuide, bounds: &IRect) -> bool {
    let oob_top = circle.y - circle.r <= bounds.y;
    let oob_bottom = circle.y + circle.r >= bounds.bottom();
    let oob_right = circle.x + circle.r >= bounds.right();
    let oob_left = circle.x - circle.r <= bounds.x;
    oob_top || oob_bottom || oob_left || oob_right
}
