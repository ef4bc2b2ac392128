//! Labeled input field restricted to an allow list of characters.

use std::collections::HashSet;

use smallvec::SmallVec;
use termprompt_core::{Attributes, ConfigError, Point, Rect, Region, Result, Size};
use termprompt_screen::{KeyCode, Keymap, Screen};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// Configuration for an [`InputField`].
///
/// Build one with [`FieldConfig::builder`]; the builder fills in the
/// defaults (a ten character numeric field) and `build` rejects
/// configurations that could never accept input, as well as content
/// that does not fit the configured rectangle.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    rect: Rect,
    field_length: u16,
    allowed: HashSet<char>,
    title: Option<String>,
    label: Option<String>,
    gap: u16,
    label_origin: Option<Point>,
    field_origin: Option<Point>,
    enter_keys: Keymap,
    backspace_keys: Keymap,
    framed: bool,
}

impl FieldConfig {
    /// Starts a builder with the default numeric field configuration.
    pub fn builder() -> FieldConfigBuilder {
        FieldConfigBuilder::default()
    }

    /// The rectangle the field derives its region from.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Maximum number of characters the field accepts.
    pub fn field_length(&self) -> u16 {
        self.field_length
    }
}

/// Builder for [`FieldConfig`].
#[derive(Debug, Clone)]
pub struct FieldConfigBuilder {
    config: FieldConfig,
}

impl Default for FieldConfigBuilder {
    fn default() -> Self {
        Self {
            config: FieldConfig {
                rect: Rect::new(0, 0, 20, 10),
                field_length: 10,
                allowed: ('0'..='9').collect(),
                title: None,
                label: None,
                gap: 1,
                label_origin: None,
                field_origin: None,
                enter_keys: Keymap::new([KeyCode::Enter, KeyCode::Char('\n')]),
                backspace_keys: Keymap::new([
                    KeyCode::Backspace,
                    KeyCode::Char('\u{8}'),
                    KeyCode::Char('\u{7f}'),
                ]),
                framed: false,
            },
        }
    }
}

impl FieldConfigBuilder {
    /// Places the field at `rect` within its parent region.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.config.rect = rect;
        self
    }

    /// Sets the number of characters the field accepts.
    pub fn field_length(mut self, length: u16) -> Self {
        self.config.field_length = length;
        self
    }

    /// Replaces the allow list of accepted characters.
    pub fn allowed(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.config.allowed = chars.into_iter().collect();
        self
    }

    /// Adds a bold title on the first row of the field region.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Adds a label to the left of the input cells. Newlines split it into
    /// multiple rows.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Sets the number of blank columns between label and input cells.
    pub fn gap(mut self, gap: u16) -> Self {
        self.config.gap = gap;
        self
    }

    /// Pins the label to an explicit position instead of the derived one.
    pub fn label_origin(mut self, at: Point) -> Self {
        self.config.label_origin = Some(at);
        self
    }

    /// Pins the input cells to an explicit position instead of the derived
    /// one. `Point::ZERO` is a valid position.
    pub fn field_origin(mut self, at: Point) -> Self {
        self.config.field_origin = Some(at);
        self
    }

    /// Replaces the keys that submit the field.
    pub fn enter_keys(mut self, keys: Keymap) -> Self {
        self.config.enter_keys = keys;
        self
    }

    /// Replaces the keys that delete the last character.
    pub fn backspace_keys(mut self, keys: Keymap) -> Self {
        self.config.backspace_keys = keys;
        self
    }

    /// Draws a frame around the shrunk field region. Content moves inward
    /// by one cell on each side.
    pub fn framed(mut self, framed: bool) -> Self {
        self.config.framed = framed;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> std::result::Result<FieldConfig, ConfigError> {
        let config = self.config;
        if config.allowed.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        if config.field_length == 0 {
            return Err(ConfigError::ZeroFieldLength);
        }
        if config.rect.width == 0 || config.rect.height == 0 {
            return Err(ConfigError::RectTooSmall {
                width: config.rect.width,
                height: config.rect.height,
            });
        }
        if config.enter_keys.is_empty() {
            return Err(ConfigError::EmptyKeymap { name: "enter" });
        }
        if config.backspace_keys.is_empty() {
            return Err(ConfigError::EmptyKeymap { name: "backspace" });
        }
        let layout = compute_layout(&config);
        if layout.size.width > config.rect.width || layout.size.height > config.rect.height {
            return Err(ConfigError::ContentTooLarge {
                width: layout.size.width,
                height: layout.size.height,
                rect_width: config.rect.width,
                rect_height: config.rect.height,
            });
        }
        Ok(config)
    }
}

/// Positions derived from a [`FieldConfig`] before any drawing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// First cell of the label block.
    pub label_origin: Point,
    /// First input cell; the cursor rests at `field_origin + buffer length`.
    pub field_origin: Point,
    /// Widest label row in columns.
    pub info_width: u16,
    /// Number of label rows.
    pub info_height: u16,
    /// Region size after shrinking to content.
    pub size: Size,
}

fn label_metrics(label: &str) -> (u16, u16) {
    let mut width = 0usize;
    let mut height = 0u16;
    for line in label.trim().split('\n') {
        width = width.max(line.width());
        height += 1;
    }
    (width as u16, height)
}

fn compute_layout(config: &FieldConfig) -> FieldLayout {
    let inset = u16::from(config.framed);
    let mut label_y = inset + 1;
    if config.title.is_some() {
        label_y += 1;
    }

    let (info_width, info_height) = match &config.label {
        Some(label) => label_metrics(label),
        None => (0, 0),
    };
    let label_origin = config
        .label_origin
        .unwrap_or(Point::new(inset, label_y));
    let field_origin = config.field_origin.unwrap_or(Point::new(
        label_origin.x.saturating_add(info_width).saturating_add(config.gap),
        label_origin.y,
    ));

    let title_rows = if config.title.is_some() { inset + 1 } else { 0 };
    let label_rows = if config.label.is_some() {
        label_origin.y.saturating_add(info_height)
    } else {
        0
    };
    let content_bottom = field_origin.y.saturating_add(1).max(label_rows).max(title_rows);
    let label_right = if config.label.is_some() {
        label_origin.x.saturating_add(info_width)
    } else {
        0
    };
    let content_right = field_origin.x.saturating_add(config.field_length).max(label_right);

    FieldLayout {
        label_origin,
        field_origin,
        info_width,
        info_height,
        size: Size::new(
            content_right.saturating_add(inset),
            content_bottom.saturating_add(inset),
        ),
    }
}

/// A blocking input field embedded in a parent region.
///
/// Opening the field draws its title, label and pre-filled input cells, then
/// shrinks the region to exactly the drawn content. [`read_input`] runs the
/// key loop until the user submits.
///
/// [`read_input`]: InputField::read_input
pub struct InputField {
    config: FieldConfig,
    layout: FieldLayout,
    region: Region,
    buffer: SmallVec<[char; 16]>,
}

impl InputField {
    /// Derives the field region from `parent` and draws the idle field.
    pub fn open(
        config: FieldConfig,
        screen: &mut impl Screen,
        parent: &Region,
    ) -> Result<Self> {
        let layout = compute_layout(&config);
        let mut region = parent.subregion(config.rect)?;
        let inset = u16::from(config.framed);

        if let Some(title) = &config.title {
            screen.write_text(&region, Point::new(inset, inset), title, Attributes::BOLD)?;
        }
        if let Some(label) = &config.label {
            let mut at = layout.label_origin;
            for line in label.trim().split('\n') {
                screen.write_text(&region, at, line, Attributes::NONE)?;
                at = at.offset(0, 1);
            }
        }
        let blanks = " ".repeat(usize::from(config.field_length));
        screen.write_text(&region, layout.field_origin, &blanks, Attributes::REVERSE)?;

        screen.resize_region(&mut region, layout.size)?;
        if config.framed {
            screen.draw_frame(&region)?;
        }
        screen.refresh()?;

        debug!(rect = ?region.rect(), "input field opened");
        Ok(Self {
            config,
            layout,
            region,
            buffer: SmallVec::new(),
        })
    }

    /// Reads characters until a submit key arrives or the field is full.
    ///
    /// Accepted characters echo in reverse video at the cursor. A backspace
    /// key drops the last character and restores the pre-filled cell;
    /// pressing it on an empty buffer does nothing. Any other key sounds
    /// the bell and leaves the buffer unchanged.
    pub fn read_input(&mut self, screen: &mut impl Screen) -> Result<String> {
        self.buffer.clear();
        while self.buffer.len() < usize::from(self.config.field_length) {
            let key = screen.next_key(&self.region, self.cursor())?;
            if self.config.enter_keys.contains(key) {
                break;
            }
            if self.config.backspace_keys.contains(key) {
                if self.buffer.pop().is_some() {
                    let freed = self.cursor();
                    screen.erase_char(&self.region, freed)?;
                    screen.write_char(&self.region, freed, ' ', Attributes::REVERSE)?;
                    screen.refresh()?;
                }
                continue;
            }
            match key {
                KeyCode::Char(ch) if self.config.allowed.contains(&ch) => {
                    screen.write_char(&self.region, self.cursor(), ch, Attributes::REVERSE)?;
                    self.buffer.push(ch);
                    screen.refresh()?;
                    trace!(%ch, "character accepted");
                }
                other => {
                    screen.alert()?;
                    trace!(key = %other, "key rejected");
                }
            }
        }
        let answer: String = self.buffer.iter().collect();
        debug!(chars = answer.len(), "input submitted");
        Ok(answer)
    }

    /// The field's shrunk region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The derived layout.
    pub fn layout(&self) -> FieldLayout {
        self.layout
    }

    fn cursor(&self) -> Point {
        self.layout.field_origin.offset(self.buffer.len() as u16, 0)
    }
}
