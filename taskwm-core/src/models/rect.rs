//! The axis-aligned integer rectangle every container's bounds are stored in.
use serde::{Deserialize, Serialize};

/// Rectangle described by its edges; `left <= right` and `top <= bottom`
/// hold for every rect observed outside an in-place mutation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rect encloses no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn set_empty(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// Replace this rect with its intersection with `other`. When the two
    /// do not overlap, this rect is left untouched and `false` is returned.
    pub fn intersect(&mut self, other: &Self) -> bool {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            *self = Self::new(left, top, right, bottom);
            return true;
        }
        false
    }

    /// Expand each edge independently so this rect also covers `other`.
    pub fn union(&mut self, other: &Self) {
        if other.left < self.left {
            self.left = other.left;
        }
        if other.top < self.top {
            self.top = other.top;
        }
        if other.right > self.right {
            self.right = other.right;
        }
        if other.bottom > self.bottom {
            self.bottom = other.bottom;
        }
    }

    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.left += dx;
        self.top += dy;
        self.right += dx;
        self.bottom += dy;
    }

    /// Move the rect so its top-left corner sits at `(x, y)`.
    pub fn offset_to(&mut self, x: i32, y: i32) {
        self.offset(x - self.left, y - self.top);
    }
}
