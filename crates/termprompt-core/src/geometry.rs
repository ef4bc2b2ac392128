//! Geometry types for terminal cell layout.
//!
//! This module provides the geometry primitives used throughout termprompt:
//! - [`Point`]: a 2D cell position
//! - [`Size`]: a 2D extent in cells
//! - [`Rect`]: a rectangle combining position and size
//! - [`Region`]: an absolute drawing area that widgets address in local coordinates
//!
//! Coordinates are unsigned: (0, 0) is the top-left cell of the screen, x grows
//! to the right and y grows downward. All types are Copy and cheap to pass around.

use crate::error::{GeometryError, GeometryResult};

/// A 2D cell position.
///
/// # Examples
///
/// ```
/// use termprompt_core::geometry::Point;
///
/// let p = Point::new(10, 20);
/// assert_eq!(p.offset(5, 1), Point::new(15, 21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x coordinate (column).
    pub x: u16,
    /// The y coordinate (row).
    pub y: u16,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by the given amounts, saturating at the bounds.
    #[inline]
    pub const fn offset(self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(u16, u16)> for Point {
    #[inline]
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (u16, u16) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A 2D extent in character cells.
///
/// # Examples
///
/// ```
/// use termprompt_core::geometry::Size;
///
/// let size = Size::new(80, 24);
/// assert!(!size.is_empty());
/// assert!(size.contains_size(Size::new(20, 10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width in columns.
    pub width: u16,
    /// The height in rows.
    pub height: u16,
}

impl Size {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether this size can contain the other size.
    #[inline]
    pub const fn contains_size(self, other: Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl From<(u16, u16)> for Size {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for (u16, u16) {
    #[inline]
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// A rectangle defined by its top-left corner and size.
///
/// # Examples
///
/// ```
/// use termprompt_core::geometry::{Point, Rect};
///
/// let rect = Rect::new(10, 5, 60, 18);
/// assert_eq!(rect.right(), 70);
/// assert_eq!(rect.bottom(), 23);
/// assert!(rect.contains_point(Point::new(50, 20)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: u16,
    /// The y coordinate of the top edge.
    pub y: u16,
    /// The width of the rectangle.
    pub width: u16,
    /// The height of the rectangle.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle at the given position with the given size.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position point and size.
    #[inline]
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the position (top-left corner) of the rectangle.
    #[inline]
    pub const fn position(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the size of the rectangle.
    #[inline]
    pub const fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the x coordinate of the left edge.
    #[inline]
    pub const fn left(self) -> u16 {
        self.x
    }

    /// Returns the y coordinate of the top edge.
    #[inline]
    pub const fn top(self) -> u16 {
        self.y
    }

    /// Returns the x coordinate one past the right edge.
    #[inline]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Returns the y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Returns whether the rectangle has zero area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether the given point lies inside the rectangle.
    #[inline]
    pub const fn contains_point(self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns whether `other` lies entirely inside this rectangle.
    #[inline]
    pub const fn contains_rect(self, other: Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// An absolute drawing area addressed in local coordinates.
///
/// A region is pure geometry: it carries no cell contents and no reference to a
/// surface. Widgets receive a parent region, derive children with [`subregion`],
/// and hand the region back to a surface implementation together with local
/// points; the surface translates local points to screen cells via
/// [`to_absolute`].
///
/// [`subregion`]: Region::subregion
/// [`to_absolute`]: Region::to_absolute
///
/// # Examples
///
/// ```
/// use termprompt_core::geometry::{Point, Rect, Region, Size};
///
/// let root = Region::from_size(Size::new(80, 24));
/// let dialog = root.subregion(Rect::new(10, 2, 60, 20)).unwrap();
/// let choice_row = dialog.subregion(Rect::new(1, 18, 58, 1)).unwrap();
///
/// assert_eq!(choice_row.to_absolute(Point::new(0, 0)), Point::new(11, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    rect: Rect,
}

impl Region {
    /// Creates a region covering the given absolute rectangle.
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Creates a region of the given size anchored at the screen origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            rect: Rect::from_size(size),
        }
    }

    /// Returns the absolute rectangle this region covers.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the region size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.rect.size()
    }

    /// Derives a child region from a rectangle in this region's local
    /// coordinates.
    ///
    /// The child must lie entirely inside the parent; a child that pokes out
    /// is a caller bug and is rejected rather than clamped.
    pub fn subregion(&self, local: Rect) -> GeometryResult<Self> {
        if local.is_empty() {
            return Err(GeometryError::InvalidDimensions {
                width: local.width,
                height: local.height,
            });
        }

        let fits_x = u32::from(local.x) + u32::from(local.width) <= u32::from(self.rect.width);
        let fits_y = u32::from(local.y) + u32::from(local.height) <= u32::from(self.rect.height);
        if !fits_x || !fits_y {
            return Err(GeometryError::RegionOutOfBounds {
                x: local.x,
                y: local.y,
                width: local.width,
                height: local.height,
            });
        }

        Ok(Self {
            rect: Rect::new(
                self.rect.x.saturating_add(local.x),
                self.rect.y.saturating_add(local.y),
                local.width,
                local.height,
            ),
        })
    }

    /// Translates a local point into absolute screen coordinates.
    #[inline]
    pub const fn to_absolute(&self, at: Point) -> Point {
        Point {
            x: self.rect.x.saturating_add(at.x),
            y: self.rect.y.saturating_add(at.y),
        }
    }

    /// Returns whether the local point lies inside the region.
    #[inline]
    pub const fn contains(&self, at: Point) -> bool {
        at.x < self.rect.width && at.y < self.rect.height
    }

    /// Shrinks or grows the region in place, keeping its origin.
    #[inline]
    pub fn resize(&mut self, size: Size) {
        self.rect.width = size.width;
        self.rect.height = size.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod point_tests {
        use super::*;

        #[test]
        fn test_point_new() {
            let p = Point::new(10, 20);
            assert_eq!(p.x, 10);
            assert_eq!(p.y, 20);
        }

        #[test]
        fn test_point_zero() {
            assert_eq!(Point::ZERO, Point::new(0, 0));
        }

        #[test]
        fn test_point_offset() {
            let p = Point::new(10, 20);
            assert_eq!(p.offset(5, 3), Point::new(15, 23));
        }

        #[test]
        fn test_point_offset_saturates() {
            let p = Point::new(u16::MAX - 1, 0);
            assert_eq!(p.offset(5, 0), Point::new(u16::MAX, 0));
        }

        #[test]
        fn test_point_from_tuple() {
            let p: Point = (3, 4).into();
            assert_eq!(p, Point::new(3, 4));
            let t: (u16, u16) = p.into();
            assert_eq!(t, (3, 4));
        }
    }

    mod size_tests {
        use super::*;

        #[test]
        fn test_size_new() {
            let s = Size::new(80, 24);
            assert_eq!(s.width, 80);
            assert_eq!(s.height, 24);
        }

        #[test]
        fn test_size_is_empty() {
            assert!(Size::ZERO.is_empty());
            assert!(Size::new(0, 10).is_empty());
            assert!(Size::new(10, 0).is_empty());
            assert!(!Size::new(1, 1).is_empty());
        }

        #[test]
        fn test_size_contains_size() {
            let s = Size::new(80, 24);
            assert!(s.contains_size(Size::new(80, 24)));
            assert!(s.contains_size(Size::new(20, 10)));
            assert!(!s.contains_size(Size::new(81, 10)));
        }
    }

    mod rect_tests {
        use super::*;

        #[test]
        fn test_rect_edges() {
            let r = Rect::new(10, 5, 60, 18);
            assert_eq!(r.left(), 10);
            assert_eq!(r.top(), 5);
            assert_eq!(r.right(), 70);
            assert_eq!(r.bottom(), 23);
        }

        #[test]
        fn test_rect_contains_point() {
            let r = Rect::new(10, 5, 60, 18);
            assert!(r.contains_point(Point::new(10, 5)));
            assert!(r.contains_point(Point::new(69, 22)));
            assert!(!r.contains_point(Point::new(70, 5)));
            assert!(!r.contains_point(Point::new(10, 23)));
            assert!(!r.contains_point(Point::new(9, 5)));
        }

        #[test]
        fn test_rect_contains_rect() {
            let r = Rect::new(0, 0, 80, 24);
            assert!(r.contains_rect(Rect::new(10, 2, 60, 20)));
            assert!(r.contains_rect(r));
            assert!(!r.contains_rect(Rect::new(30, 10, 60, 20)));
        }

        #[test]
        fn test_rect_from_point_size() {
            let r = Rect::from_point_size(Point::new(5, 3), Size::new(20, 10));
            assert_eq!(r, Rect::new(5, 3, 20, 10));
        }
    }

    mod region_tests {
        use super::*;

        #[test]
        fn test_region_subregion_translates() {
            let root = Region::from_size(Size::new(80, 24));
            let child = root.subregion(Rect::new(5, 3, 20, 10)).unwrap();
            assert_eq!(child.rect(), Rect::new(5, 3, 20, 10));

            let grandchild = child.subregion(Rect::new(1, 1, 18, 8)).unwrap();
            assert_eq!(grandchild.rect(), Rect::new(6, 4, 18, 8));
        }

        #[test]
        fn test_region_subregion_at_origin() {
            // Row and column zero are ordinary positions.
            let root = Region::from_size(Size::new(80, 24));
            let child = root.subregion(Rect::new(0, 0, 10, 1)).unwrap();
            assert_eq!(child.to_absolute(Point::ZERO), Point::ZERO);
        }

        #[test]
        fn test_region_subregion_rejects_overflow() {
            let root = Region::from_size(Size::new(80, 24));
            let err = root.subregion(Rect::new(70, 0, 20, 10)).unwrap_err();
            assert_eq!(
                err,
                GeometryError::RegionOutOfBounds {
                    x: 70,
                    y: 0,
                    width: 20,
                    height: 10
                }
            );
        }

        #[test]
        fn test_region_subregion_rejects_empty() {
            let root = Region::from_size(Size::new(80, 24));
            let err = root.subregion(Rect::new(0, 0, 0, 5)).unwrap_err();
            assert_eq!(
                err,
                GeometryError::InvalidDimensions {
                    width: 0,
                    height: 5
                }
            );
        }

        #[test]
        fn test_region_to_absolute() {
            let region = Region::new(Rect::new(10, 2, 60, 20));
            assert_eq!(region.to_absolute(Point::new(1, 18)), Point::new(11, 20));
        }

        #[test]
        fn test_region_contains_local() {
            let region = Region::new(Rect::new(10, 2, 60, 20));
            assert!(region.contains(Point::ZERO));
            assert!(region.contains(Point::new(59, 19)));
            assert!(!region.contains(Point::new(60, 0)));
        }

        #[test]
        fn test_region_resize() {
            let mut region = Region::new(Rect::new(5, 5, 20, 10));
            region.resize(Size::new(14, 2));
            assert_eq!(region.rect(), Rect::new(5, 5, 14, 2));
        }
    }
}
