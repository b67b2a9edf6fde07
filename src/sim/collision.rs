//! Axis-aligned bounding box geometry
//!
//! Every entity on the board occupies an axis-aligned rectangle; all
//! collision in the game reduces to the strict-overlap test below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in board coordinates.
///
/// `pos` is the top-left corner (y grows downward, matching the board).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Strict AABB overlap: touching edges do not count as a hit.
///
/// Pure and symmetric in its arguments.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_hit() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_disjoint_miss() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_edge_touch_is_not_a_hit() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
        // Shares the y=10 edge exactly
        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &c));
    }

    #[test]
    fn test_containment_is_a_hit() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    proptest! {
        /// intersects(a, b) == intersects(b, a) for all rectangle pairs
        #[test]
        fn prop_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        /// A rectangle always overlaps itself
        #[test]
        fn prop_reflexive(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.1f32..200.0, h in 0.1f32..200.0,
        ) {
            let a = Aabb::new(x, y, w, h);
            prop_assert!(intersects(&a, &a));
        }
    }
}
