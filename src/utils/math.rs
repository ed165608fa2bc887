//! # Scene Geometry
//!
//! Axis-aligned rectangles in scene coordinates. X grows to the right and Y
//! grows downward, so a platform's top edge is its smallest Y.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in integer scene units.
///
/// # Examples
///
/// ```
/// use cave_explorer::Rect;
///
/// let rect = Rect::new(100, 200, 80, 20);
/// assert_eq!(rect.right(), 180);
/// assert_eq!(rect.center(), (140, 210));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center, rounded toward the left edge.
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Vertical center, rounded toward the top edge.
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Gets the center point of the rectangle.
    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    /// Whether both dimensions are positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Checks if this rectangle overlaps with another.
    ///
    /// Rectangles that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use cave_explorer::Rect;
    ///
    /// let a = Rect::new(0, 0, 10, 10);
    /// assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
    /// assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }

    /// Checks if the horizontal spans of the two rectangles overlap.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    /// Checks if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
