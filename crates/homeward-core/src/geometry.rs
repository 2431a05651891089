//! Axis-aligned rectangle geometry and the shared slide-and-clamp resolver.
//!
//! Player and enemy movement both go through [`move_and_slide`]: the
//! rectangle moves along x, is clamped against every obstacle it now
//! overlaps, then does the same along y. Splitting the axes is what lets
//! a mover slide along a wall and past the inside corner of two adjacent
//! obstacles instead of sticking to them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world pixels. `x`/`y` is the top-left corner,
/// y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Place the right edge at `right`. Rounding may leave it a few ulps
    /// short of `right`, never past it, so a rect clamped against an
    /// obstacle's left edge never `intersects` that obstacle.
    pub fn set_right(&mut self, right: f32) {
        self.x = pull_back(right - self.w, self.w, right);
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Place the bottom edge at `bottom`, rounding toward the top like
    /// [`Rect::set_right`].
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = pull_back(bottom - self.h, self.h, bottom);
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    /// Grow (or shrink, for negative amounts) around the same center.
    /// Sizes never go below zero.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        let size = Vec2::new((self.w + dx).max(0.0), (self.h + dy).max(0.0));
        Self::from_center(self.center(), size)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// intersect, and empty rectangles intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0.0
            && self.h > 0.0
            && other.w > 0.0
            && other.h > 0.0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `point` lies inside (left/top edges inclusive).
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// Overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Move `start` down until `start + size <= edge` holds in f32. The nudge
/// starts at one rounding step of the largest operand and doubles.
fn pull_back(start: f32, size: f32, edge: f32) -> f32 {
    if !(start.is_finite() && size.is_finite() && edge.is_finite()) {
        return start;
    }
    let mut origin = start;
    let mut nudge = f32::EPSILON * edge.abs().max(size.abs()).max(start.abs()).max(1.0);
    while origin + size > edge {
        origin -= nudge;
        nudge *= 2.0;
    }
    origin
}

/// Normalize `v`, mapping the zero vector (and anything non-finite) to zero
/// instead of dividing by a zero length.
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        Vec2::ZERO
    }
}

/// Clamp `rect` out of every obstacle it overlaps along one axis.
///
/// `motion` is the sign-carrying direction component on that axis; a zero
/// component leaves the rectangle where it is. Obstacles are visited in
/// order, so an overlap with several obstacles re-clamps to the last one.
pub fn resolve_axis(rect: &mut Rect, axis: Axis, motion: f32, obstacles: &[Rect]) {
    for obstacle in obstacles {
        if !obstacle.intersects(rect) {
            continue;
        }
        match axis {
            Axis::Horizontal => {
                if motion > 0.0 {
                    rect.set_right(obstacle.left());
                }
                if motion < 0.0 {
                    rect.set_left(obstacle.right());
                }
            }
            Axis::Vertical => {
                if motion < 0.0 {
                    rect.set_top(obstacle.bottom());
                }
                if motion > 0.0 {
                    rect.set_bottom(obstacle.top());
                }
            }
        }
    }
}

/// Move `hitbox` by `direction * distance`, x first then y, resolving
/// obstacle overlaps after each axis.
pub fn move_and_slide(hitbox: Rect, direction: Vec2, distance: f32, obstacles: &[Rect]) -> Rect {
    let mut moved = hitbox;

    moved.x += direction.x * distance;
    resolve_axis(&mut moved, Axis::Horizontal, direction.x, obstacles);

    moved.y += direction.y * distance;
    resolve_axis(&mut moved, Axis::Vertical, direction.y, obstacles);

    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inflate_keeps_center() {
        let sprite = Rect::from_center(Vec2::new(100.0, 200.0), Vec2::new(96.0, 128.0));
        let hitbox = sprite.inflate(-60.0, -90.0);
        assert_eq!(hitbox.center(), sprite.center());
        assert_eq!(hitbox.size(), Vec2::new(36.0, 38.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translated(Vec2::new(-0.5, 0.0))));
    }

    #[test]
    fn test_slide_right_into_wall() {
        let wall = Rect::new(50.0, -100.0, 20.0, 300.0);
        let hitbox = Rect::new(0.0, 0.0, 40.0, 40.0);
        let moved = move_and_slide(hitbox, Vec2::new(1.0, 0.0), 30.0, &[wall]);
        assert_eq!(moved.right(), wall.left());
        assert_eq!(moved.y, 0.0);
    }

    #[test]
    fn test_slide_along_wall_keeps_vertical_motion() {
        // Moving diagonally down-right into a vertical wall: x is blocked,
        // y still advances.
        let wall = Rect::new(50.0, -100.0, 20.0, 300.0);
        let hitbox = Rect::new(0.0, 0.0, 40.0, 40.0);
        let dir = normalize_or_zero(Vec2::new(1.0, 1.0));
        let moved = move_and_slide(hitbox, dir, 20.0, &[wall]);
        assert_eq!(moved.right(), wall.left());
        assert!(moved.y > 0.0);
    }

    #[test]
    fn test_no_snag_on_inside_corner_seam() {
        // Two floor tiles side by side; walking left along their top edge
        // must not catch on the seam between them.
        let floor_a = Rect::new(0.0, 100.0, 64.0, 64.0);
        let floor_b = Rect::new(64.0, 100.0, 64.0, 64.0);
        let hitbox = Rect::new(70.0, 60.0, 40.0, 40.0);
        let dir = normalize_or_zero(Vec2::new(-1.0, 1.0));
        let moved = move_and_slide(hitbox, dir, 10.0, &[floor_a, floor_b]);
        assert!(moved.x < hitbox.x, "should keep sliding left");
        assert_eq!(moved.bottom(), 100.0);
    }

    #[test]
    fn test_moving_up_and_left_clamps() {
        let ceiling = Rect::new(-100.0, -50.0, 300.0, 40.0);
        let hitbox = Rect::new(0.0, 0.0, 20.0, 20.0);
        let moved = move_and_slide(hitbox, Vec2::new(0.0, -1.0), 25.0, &[ceiling]);
        assert_eq!(moved.top(), ceiling.bottom());

        let left_wall = Rect::new(-40.0, -100.0, 30.0, 300.0);
        let moved = move_and_slide(hitbox, Vec2::new(-1.0, 0.0), 25.0, &[left_wall]);
        assert_eq!(moved.left(), left_wall.right());
    }

    #[test]
    fn test_clamp_against_fractional_edge_clears_obstacle() {
        let wall = Rect::new(0.1, -500.0, 64.0, 1000.0);
        let hitbox = Rect::new(-25.0, 0.0, 20.0, 20.0);
        let moved = move_and_slide(hitbox, Vec2::new(1.0, 0.0), 10.0, &[wall]);
        assert!(!moved.intersects(&wall));
        assert!(moved.right() <= wall.left());
        assert!(wall.left() - moved.right() < 1e-4);
        assert_eq!(moved.y, 0.0);
    }

    #[test]
    fn test_diagonal_slide_along_fractional_wall_keeps_height() {
        // The horizontal clamp must clear the wall, or the vertical pass
        // would snap the mover onto the wall's top edge.
        let wall = Rect::new(0.1, -500.0, 64.0, 1000.0);
        let hitbox = Rect::new(-25.0, 0.0, 20.0, 20.0);
        let dir = normalize_or_zero(Vec2::new(1.0, 1.0));
        let moved = move_and_slide(hitbox, dir, 10.0, &[wall]);
        assert!(!moved.intersects(&wall));
        assert!((moved.y - dir.y * 10.0).abs() < 1e-4);
        assert!(wall.left() - moved.right() < 1e-4);
    }

    #[test]
    fn test_set_bottom_never_passes_edge() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 20.0);
        for edge in [0.1f32, 0.3, 17.7, -3.3, 1234.567] {
            r.set_bottom(edge);
            assert!(r.bottom() <= edge);
            assert!(edge - r.bottom() < 1e-3);
            assert_eq!(r.h, 20.0);
        }
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize_or_zero(Vec2::ZERO), Vec2::ZERO);
        let n = normalize_or_zero(Vec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_zero_magnitude_normalizes_to_zero(sign_x in any::<bool>(), sign_y in any::<bool>()) {
            let v = Vec2::new(if sign_x { 0.0 } else { -0.0 }, if sign_y { 0.0 } else { -0.0 });
            prop_assert_eq!(normalize_or_zero(v), Vec2::ZERO);
        }

        #[test]
        fn prop_nonzero_normalizes_to_unit(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = normalize_or_zero(Vec2::new(x, y));
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_resolution_never_overlaps_or_resizes(
            obstacle_x in -60.0f32..60.0,
            obstacle_y in -60.0f32..60.0,
            obstacle_w in 0.5f32..90.0,
            obstacle_h in 0.5f32..90.0,
            start_x in -200.0f32..200.0,
            start_y in -200.0f32..200.0,
            mover_w in 0.5f32..60.0,
            mover_h in 0.5f32..60.0,
            dir_x in -1.0f32..1.0,
            dir_y in -1.0f32..1.0,
            distance in 0.0f32..40.0,
        ) {
            let obstacle = Rect::new(obstacle_x, obstacle_y, obstacle_w, obstacle_h);
            let hitbox = Rect::new(start_x, start_y, mover_w, mover_h);
            prop_assume!(!hitbox.intersects(&obstacle));
            let dir = normalize_or_zero(Vec2::new(dir_x, dir_y));

            let mut after_x = hitbox;
            after_x.x += dir.x * distance;
            resolve_axis(&mut after_x, Axis::Horizontal, dir.x, &[obstacle]);
            prop_assert!(!after_x.intersects(&obstacle));

            let moved = move_and_slide(hitbox, dir, distance, &[obstacle]);
            prop_assert!(!moved.intersects(&obstacle));
            prop_assert_eq!(moved.size(), hitbox.size());
        }
    }
}
