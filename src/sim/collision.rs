//! Axis-aligned bounding box overlap tests
//!
//! Every entity on the board is a rectangle, so a single strict overlap test
//! covers aircraft/obstacle and projectile/obstacle collisions.

use glam::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// True if both the x-ranges and y-ranges overlap.
    ///
    /// Ranges are open: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Index of the first box in `candidates` that overlaps `probe` and is not
/// excluded by `skip`.
pub fn first_overlap<'a, I>(probe: &Aabb, candidates: I, skip: &[bool]) -> Option<usize>
where
    I: IntoIterator<Item = &'a Aabb>,
{
    candidates
        .into_iter()
        .enumerate()
        .find(|(i, b)| !skip.get(*i).copied().unwrap_or(false) && probe.overlaps(b))
        .map(|(i, _)| i)
}
