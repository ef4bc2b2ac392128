//! Crossterm-backed terminal surface.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{execute, queue, terminal};
use termprompt_core::{Attributes, Error, Point, Region, Result, Size};
use tracing::trace;

use crate::key::KeyCode;
use crate::screen::{check_frame, check_write, FrameChars, Screen};

/// Terminal surface backed by crossterm over standard output.
///
/// Drawing calls queue terminal commands; [`Screen::refresh`] flushes them.
/// Mode switching (raw mode, alternate screen) is the job of
/// [`TerminalSession`](crate::TerminalSession), not the surface.
pub struct CrosstermScreen {
    stdout: Stdout,
    size: Size,
    frame: FrameChars,
}

impl CrosstermScreen {
    /// Creates a surface over standard output, querying the terminal size.
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().map_err(Error::Io)?;
        Ok(Self {
            stdout: io::stdout(),
            size: Size::new(width, height),
            frame: FrameChars::SINGLE,
        })
    }

    /// Replaces the characters used by [`Screen::draw_frame`].
    pub fn set_frame_chars(&mut self, frame: FrameChars) {
        self.frame = frame;
    }

    fn queue_attributes(&mut self, attrs: Attributes) -> Result<()> {
        if attrs.contains(Attributes::BOLD) {
            queue!(self.stdout, SetAttribute(Attribute::Bold)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::DIM) {
            queue!(self.stdout, SetAttribute(Attribute::Dim)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::ITALIC) {
            queue!(self.stdout, SetAttribute(Attribute::Italic)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::UNDERLINE) {
            queue!(self.stdout, SetAttribute(Attribute::Underlined)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::BLINK) {
            queue!(self.stdout, SetAttribute(Attribute::SlowBlink)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::REVERSE) {
            queue!(self.stdout, SetAttribute(Attribute::Reverse)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::HIDDEN) {
            queue!(self.stdout, SetAttribute(Attribute::Hidden)).map_err(Error::Io)?;
        }
        if attrs.contains(Attributes::STRIKETHROUGH) {
            queue!(self.stdout, SetAttribute(Attribute::CrossedOut)).map_err(Error::Io)?;
        }
        Ok(())
    }

    fn queue_print(&mut self, abs: Point, text: &str, attrs: Attributes) -> Result<()> {
        queue!(self.stdout, MoveTo(abs.x, abs.y)).map_err(Error::Io)?;
        if attrs.is_some() {
            self.queue_attributes(attrs)?;
            queue!(self.stdout, Print(text), SetAttribute(Attribute::Reset))
                .map_err(Error::Io)?;
        } else {
            queue!(self.stdout, Print(text)).map_err(Error::Io)?;
        }
        Ok(())
    }
}

impl Screen for CrosstermScreen {
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
        self.queue_print(region.to_absolute(at), text, attrs)
    }

    fn write_char(
        &mut self,
        region: &Region,
        at: Point,
        ch: char,
        attrs: Attributes,
    ) -> Result<()> {
        check_write(region, at, 1)?;
        let mut buf = [0u8; 4];
        self.queue_print(region.to_absolute(at), ch.encode_utf8(&mut buf), attrs)
    }

    fn erase_char(&mut self, region: &Region, at: Point) -> Result<()> {
        check_write(region, at, 1)?;
        self.queue_print(region.to_absolute(at), " ", Attributes::NONE)
    }

    fn draw_frame(&mut self, region: &Region) -> Result<()> {
        check_frame(region)?;
        let size = region.size();
        let frame = self.frame;
        let inner = usize::from(size.width) - 2;

        let mut top = String::with_capacity(usize::from(size.width));
        top.push(frame.top_left);
        top.extend(std::iter::repeat(frame.horizontal).take(inner));
        top.push(frame.top_right);
        self.queue_print(region.to_absolute(Point::ZERO), &top, Attributes::NONE)?;

        let mut bottom = String::with_capacity(usize::from(size.width));
        bottom.push(frame.bottom_left);
        bottom.extend(std::iter::repeat(frame.horizontal).take(inner));
        bottom.push(frame.bottom_right);
        let bottom_at = Point::new(0, size.height - 1);
        self.queue_print(region.to_absolute(bottom_at), &bottom, Attributes::NONE)?;

        let mut buf = [0u8; 4];
        let vertical: &str = frame.vertical.encode_utf8(&mut buf);
        for y in 1..size.height - 1 {
            self.queue_print(region.to_absolute(Point::new(0, y)), vertical, Attributes::NONE)?;
            let right = Point::new(size.width - 1, y);
            self.queue_print(region.to_absolute(right), vertical, Attributes::NONE)?;
        }
        Ok(())
    }

    fn erase_region(&mut self, region: &Region) -> Result<()> {
        let size = region.size();
        let blank = " ".repeat(usize::from(size.width));
        for y in 0..size.height {
            self.queue_print(region.to_absolute(Point::new(0, y)), &blank, Attributes::NONE)?;
        }
        Ok(())
    }

    fn resize_region(&mut self, region: &mut Region, size: Size) -> Result<()> {
        region.resize(size);
        Ok(())
    }

    fn release_region(&mut self, region: Region) -> Result<()> {
        trace!(rect = ?region.rect(), "release region");
        self.erase_region(&region)?;
        self.stdout.flush().map_err(Error::Io)
    }

    fn refresh(&mut self) -> Result<()> {
        self.stdout.flush().map_err(Error::Io)
    }

    fn alert(&mut self) -> Result<()> {
        self.stdout.write_all(b"\x07").map_err(Error::Io)?;
        self.stdout.flush().map_err(Error::Io)
    }

    fn next_key(&mut self, region: &Region, cursor: Point) -> Result<KeyCode> {
        let abs = region.to_absolute(cursor);
        execute!(self.stdout, MoveTo(abs.x, abs.y)).map_err(Error::Io)?;
        loop {
            match event::read().map_err(Error::Io)? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => {
                    let key = KeyCode::from(ev);
                    trace!(key = %key, "key event");
                    return Ok(key);
                }
                Event::Resize(width, height) => {
                    self.size = Size::new(width, height);
                }
                _ => {}
            }
        }
    }
}
