//! In-memory surface with a scripted key stream, for widget tests.

use std::collections::VecDeque;

use termprompt_core::{Attributes, Error, Point, Rect, Region, Result, Size};

use crate::key::KeyCode;
use crate::screen::{check_frame, check_write, FrameChars, Screen};

/// One cell of a [`ScriptedScreen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,
    /// Attributes the cell was written with.
    pub attrs: Attributes,
}

impl Cell {
    /// An unwritten cell.
    pub const BLANK: Self = Self {
        ch: ' ',
        attrs: Attributes::NONE,
    };
}

/// A [`Screen`] that draws into a character grid and replays a fixed key
/// script instead of reading the terminal.
///
/// Every cell holds exactly one `char`; double-width glyphs are not modeled.
/// Reading past the end of the key script fails, so a test that consumes
/// more keys than it supplies errors out instead of hanging.
pub struct ScriptedScreen {
    size: Size,
    cells: Vec<Cell>,
    keys: VecDeque<KeyCode>,
    alerts: usize,
    refreshes: usize,
    released: Vec<Rect>,
}

impl ScriptedScreen {
    /// Creates a grid of the given size with a key script to replay.
    pub fn new(size: Size, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        let cells = vec![Cell::BLANK; usize::from(size.width) * usize::from(size.height)];
        Self {
            size,
            cells,
            keys: keys.into_iter().collect(),
            alerts: 0,
            refreshes: 0,
            released: Vec::new(),
        }
    }

    fn index(&self, abs: Point) -> usize {
        usize::from(abs.y) * usize::from(self.size.width) + usize::from(abs.x)
    }

    fn put(&mut self, abs: Point, ch: char, attrs: Attributes) {
        let index = self.index(abs);
        self.cells[index] = Cell { ch, attrs };
    }

    /// Returns the cell at the given absolute position.
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        self.cells[usize::from(y) * usize::from(self.size.width) + usize::from(x)]
    }

    /// Returns row `y` as a string with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let start = usize::from(y) * usize::from(self.size.width);
        let row: String = self.cells[start..start + usize::from(self.size.width)]
            .iter()
            .map(|cell| cell.ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Number of [`Screen::alert`] calls so far.
    pub fn alerts(&self) -> usize {
        self.alerts
    }

    /// Number of [`Screen::refresh`] calls so far.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Rectangles passed to [`Screen::release_region`], in call order.
    pub fn released(&self) -> &[Rect] {
        &self.released
    }

    /// Keys not yet consumed from the script.
    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Screen for ScriptedScreen {
    fn size(&self) -> Size {
        self.size
    }

    fn write_text(
        &mut self,
        region: &Region,
        at: Point,
        text: &str,
        attrs: Attributes,
    ) -> Result<()> {
        check_write(region, at, text.chars().count())?;
        for (offset, ch) in text.chars().enumerate() {
            let local = at.offset(offset as u16, 0);
            self.put(region.to_absolute(local), ch, attrs);
        }
        Ok(())
    }

    fn write_char(
        &mut self,
        region: &Region,
        at: Point,
        ch: char,
        attrs: Attributes,
    ) -> Result<()> {
        check_write(region, at, 1)?;
        self.put(region.to_absolute(at), ch, attrs);
        Ok(())
    }

    fn erase_char(&mut self, region: &Region, at: Point) -> Result<()> {
        check_write(region, at, 1)?;
        self.put(region.to_absolute(at), ' ', Attributes::NONE);
        Ok(())
    }

    fn draw_frame(&mut self, region: &Region) -> Result<()> {
        check_frame(region)?;
        let size = region.size();
        let frame = FrameChars::SINGLE;

        self.put(region.to_absolute(Point::ZERO), frame.top_left, Attributes::NONE);
        let top_right = Point::new(size.width - 1, 0);
        self.put(region.to_absolute(top_right), frame.top_right, Attributes::NONE);
        let bottom_left = Point::new(0, size.height - 1);
        self.put(region.to_absolute(bottom_left), frame.bottom_left, Attributes::NONE);
        let bottom_right = Point::new(size.width - 1, size.height - 1);
        self.put(region.to_absolute(bottom_right), frame.bottom_right, Attributes::NONE);

        for x in 1..size.width - 1 {
            self.put(region.to_absolute(Point::new(x, 0)), frame.horizontal, Attributes::NONE);
            let bottom = Point::new(x, size.height - 1);
            self.put(region.to_absolute(bottom), frame.horizontal, Attributes::NONE);
        }
        for y in 1..size.height - 1 {
            self.put(region.to_absolute(Point::new(0, y)), frame.vertical, Attributes::NONE);
            let right = Point::new(size.width - 1, y);
            self.put(region.to_absolute(right), frame.vertical, Attributes::NONE);
        }
        Ok(())
    }

    fn erase_region(&mut self, region: &Region) -> Result<()> {
        let size = region.size();
        for y in 0..size.height {
            for x in 0..size.width {
                self.put(region.to_absolute(Point::new(x, y)), ' ', Attributes::NONE);
            }
        }
        Ok(())
    }

    fn resize_region(&mut self, region: &mut Region, size: Size) -> Result<()> {
        region.resize(size);
        Ok(())
    }

    fn release_region(&mut self, region: Region) -> Result<()> {
        self.erase_region(&region)?;
        self.released.push(region.rect());
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn alert(&mut self) -> Result<()> {
        self.alerts += 1;
        Ok(())
    }

    fn next_key(&mut self, _region: &Region, _cursor: Point) -> Result<KeyCode> {
        self.keys
            .pop_front()
            .ok_or_else(|| Error::Terminal("key script exhausted".to_string()))
    }
}
