//! The abstract terminal surface the widgets draw on.

use termprompt_core::{Attributes, Error, Point, Region, Result, Size};

use crate::key::KeyCode;

/// Trait for terminal surface implementations.
///
/// All drawing calls address cells in a [`Region`]'s local coordinates; the
/// implementation translates them to absolute screen cells. Positions are
/// always explicit; the surface keeps no drawing cursor of its own.
///
/// Writes outside the region are a widget bug and fail with
/// [`Error::OutOfRegion`] rather than being clipped.
pub trait Screen {
    /// Returns the surface size in cells.
    fn size(&self) -> Size;

    /// Writes a string starting at the given local position.
    fn write_text(
        &mut self,
        region: &Region,
        at: Point,
        text: &str,
        attrs: Attributes,
    ) -> Result<()>;

    /// Writes a single character at the given local position.
    fn write_char(&mut self, region: &Region, at: Point, ch: char, attrs: Attributes)
        -> Result<()>;

    /// Blanks one cell. Fixed-width erase: nothing shifts.
    fn erase_char(&mut self, region: &Region, at: Point) -> Result<()>;

    /// Draws a frame along the region perimeter.
    fn draw_frame(&mut self, region: &Region) -> Result<()>;

    /// Blanks every cell of the region.
    fn erase_region(&mut self, region: &Region) -> Result<()>;

    /// Resizes the region in place. Only affects later drawing calls; cells
    /// already written stay on screen.
    fn resize_region(&mut self, region: &mut Region, size: Size) -> Result<()>;

    /// Releases a region at the end of its widget's life: its cells are
    /// blanked and the surface repaints so nothing of the widget remains.
    fn release_region(&mut self, region: Region) -> Result<()>;

    /// Flushes pending drawing to the terminal.
    fn refresh(&mut self) -> Result<()>;

    /// Sounds the terminal bell.
    fn alert(&mut self) -> Result<()>;

    /// Blocks until the next key arrives, with the terminal cursor parked at
    /// the given local position.
    fn next_key(&mut self, region: &Region, cursor: Point) -> Result<KeyCode>;
}

/// Characters used to draw a region frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChars {
    /// Top-left corner character.
    pub top_left: char,
    /// Top-right corner character.
    pub top_right: char,
    /// Bottom-left corner character.
    pub bottom_left: char,
    /// Bottom-right corner character.
    pub bottom_right: char,
    /// Horizontal edge character.
    pub horizontal: char,
    /// Vertical edge character.
    pub vertical: char,
}

impl FrameChars {
    /// Single-line box-drawing characters.
    pub const SINGLE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Plain ASCII frame characters.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Checks that a `width`-column write starting at `at` stays inside the region.
pub(crate) fn check_write(region: &Region, at: Point, width: usize) -> Result<()> {
    let size = region.size();
    let fits_x = usize::from(at.x) + width <= usize::from(size.width);
    if !region.contains(at) || !fits_x {
        return Err(Error::OutOfRegion {
            x: at.x,
            y: at.y,
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

/// Checks that the region is large enough to carry a frame.
pub(crate) fn check_frame(region: &Region) -> Result<()> {
    let size = region.size();
    if size.width < 2 || size.height < 2 {
        return Err(termprompt_core::GeometryError::InvalidDimensions {
            width: size.width,
            height: size.height,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termprompt_core::Rect;

    #[test]
    fn test_check_write_inside() {
        let region = Region::new(Rect::new(5, 5, 10, 4));
        assert!(check_write(&region, Point::ZERO, 10).is_ok());
        assert!(check_write(&region, Point::new(9, 3), 1).is_ok());
    }

    #[test]
    fn test_check_write_rejects_overflow() {
        let region = Region::new(Rect::new(5, 5, 10, 4));
        assert!(check_write(&region, Point::new(5, 0), 6).is_err());
        assert!(check_write(&region, Point::new(0, 4), 1).is_err());
    }

    #[test]
    fn test_check_frame_minimum() {
        assert!(check_frame(&Region::new(Rect::new(0, 0, 2, 2))).is_ok());
        assert!(check_frame(&Region::new(Rect::new(0, 0, 1, 5))).is_err());
    }
}
