//! Scrollable yes/no confirmation dialog.

use std::ops::Range;

use termprompt_core::{Attributes, ConfigError, Point, Rect, Region, Result};
use termprompt_screen::{Keymap, Screen};
use termprompt_text::{center_decorated, reflow};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

/// Configuration for a [`ConfirmDialog`].
///
/// The text field dimensions are fractions of the dialog rectangle; `build`
/// resolves them to cell counts and rejects geometry the dialog could not
/// draw into.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    rect: Rect,
    body: String,
    yes_label: String,
    no_label: String,
    fill: char,
    up_keys: Keymap,
    down_keys: Keymap,
    yes_keys: Keymap,
    no_keys: Keymap,
    confirm_keys: Keymap,
    text_width: u16,
    text_height: u16,
}

impl DialogConfig {
    /// Starts a builder with the default dialog configuration.
    pub fn builder() -> DialogConfigBuilder {
        DialogConfigBuilder::default()
    }

    /// The rectangle the dialog derives its region from.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Resolved width of the text field in cells.
    pub fn text_width(&self) -> u16 {
        self.text_width
    }

    /// Resolved height of the text field in cells.
    pub fn text_height(&self) -> u16 {
        self.text_height
    }
}

/// Builder for [`DialogConfig`].
#[derive(Debug, Clone)]
pub struct DialogConfigBuilder {
    rect: Rect,
    width_coeff: f64,
    height_coeff: f64,
    body: String,
    yes_label: String,
    no_label: String,
    fill: char,
    up_keys: Keymap,
    down_keys: Keymap,
    yes_keys: Keymap,
    no_keys: Keymap,
    confirm_keys: Keymap,
}

impl Default for DialogConfigBuilder {
    fn default() -> Self {
        use termprompt_screen::KeyCode::{Char, Down, Enter, Left, Right, Up};
        Self {
            rect: Rect::new(0, 0, 60, 20),
            width_coeff: 0.9,
            height_coeff: 0.85,
            body: String::new(),
            yes_label: "<YES>".to_string(),
            no_label: "<NO>".to_string(),
            fill: '*',
            up_keys: Keymap::new([Up, Char('k')]),
            down_keys: Keymap::new([Down, Char('j')]),
            yes_keys: Keymap::new([Char('y'), Right]),
            no_keys: Keymap::new([Char('n'), Left]),
            confirm_keys: Keymap::new([Enter, Char('\n')]),
        }
    }
}

impl DialogConfigBuilder {
    /// Places the dialog at `rect` on the screen.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Sets the text field width as a fraction of the dialog width.
    pub fn width_coeff(mut self, coeff: f64) -> Self {
        self.width_coeff = coeff;
        self
    }

    /// Sets the text field height as a fraction of the dialog height.
    pub fn height_coeff(mut self, coeff: f64) -> Self {
        self.height_coeff = coeff;
        self
    }

    /// Sets the text shown in the dialog body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Replaces the label on the accepting choice.
    pub fn yes_label(mut self, label: impl Into<String>) -> Self {
        self.yes_label = label.into();
        self
    }

    /// Replaces the label on the declining choice.
    pub fn no_label(mut self, label: impl Into<String>) -> Self {
        self.no_label = label.into();
        self
    }

    /// Sets the character used to pad body lines to the field width.
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Replaces the keys that scroll the body up.
    pub fn up_keys(mut self, keys: Keymap) -> Self {
        self.up_keys = keys;
        self
    }

    /// Replaces the keys that scroll the body down.
    pub fn down_keys(mut self, keys: Keymap) -> Self {
        self.down_keys = keys;
        self
    }

    /// Replaces the keys that indicate the accepting choice.
    pub fn yes_keys(mut self, keys: Keymap) -> Self {
        self.yes_keys = keys;
        self
    }

    /// Replaces the keys that indicate the declining choice.
    pub fn no_keys(mut self, keys: Keymap) -> Self {
        self.no_keys = keys;
        self
    }

    /// Replaces the keys that confirm the indicated choice.
    pub fn confirm_keys(mut self, keys: Keymap) -> Self {
        self.confirm_keys = keys;
        self
    }

    /// Validates the geometry and returns the configuration.
    pub fn build(self) -> std::result::Result<DialogConfig, ConfigError> {
        if self.rect.width < 4 || self.rect.height < 4 {
            return Err(ConfigError::RectTooSmall {
                width: self.rect.width,
                height: self.rect.height,
            });
        }
        check_coefficient("width_coeff", self.width_coeff)?;
        check_coefficient("height_coeff", self.height_coeff)?;

        let text_width = scaled(self.rect.width, self.width_coeff);
        let text_height = scaled(self.rect.height, self.height_coeff);
        if text_width == 0 || text_height < 2 {
            return Err(ConfigError::DegenerateTextField {
                width: text_width,
                height: text_height,
            });
        }
        // body rows, one blank row, the choice row, then the bottom frame
        if text_height + 3 > self.rect.height {
            return Err(ConfigError::TextFieldTooTall {
                text_height,
                height: self.rect.height,
            });
        }

        let max_label = usize::from((self.rect.width - 2) / 2);
        for label in [&self.yes_label, &self.no_label] {
            let width = label.width();
            if width > max_label {
                return Err(ConfigError::LabelTooWide { width, max: max_label });
            }
        }
        for (name, keys) in [
            ("up", &self.up_keys),
            ("down", &self.down_keys),
            ("yes", &self.yes_keys),
            ("no", &self.no_keys),
            ("confirm", &self.confirm_keys),
        ] {
            if keys.is_empty() {
                return Err(ConfigError::EmptyKeymap { name });
            }
        }

        Ok(DialogConfig {
            rect: self.rect,
            body: self.body,
            yes_label: self.yes_label,
            no_label: self.no_label,
            fill: self.fill,
            up_keys: self.up_keys,
            down_keys: self.down_keys,
            yes_keys: self.yes_keys,
            no_keys: self.no_keys,
            confirm_keys: self.confirm_keys,
            text_width,
            text_height,
        })
    }
}

fn scaled(cells: u16, coeff: f64) -> u16 {
    (f64::from(cells) * coeff).floor() as u16
}

fn check_coefficient(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::CoefficientOutOfRange { name, value })
    }
}

/// A view over the reflowed body lines, one page high.
///
/// The window slides over line indices; it never grows or shrinks. Scrolling
/// up stops at the first line, scrolling down is unchecked because the
/// pagination loop uses the lower bound passing the line count as its exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    upper: usize,
    lower: usize,
}

impl ScrollWindow {
    /// A window over the first `page_height` lines.
    pub fn new(page_height: usize) -> Self {
        Self {
            upper: 0,
            lower: page_height,
        }
    }

    /// Index of the first visible line.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Index one past the last visible line.
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// The visible line indices.
    pub fn range(&self) -> Range<usize> {
        self.upper..self.lower
    }

    /// Number of lines the window shows.
    pub fn page_height(&self) -> usize {
        self.lower - self.upper
    }

    /// Slides one line up. Returns `false` when already at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.upper == 0 {
            return false;
        }
        self.upper -= 1;
        self.lower -= 1;
        true
    }

    /// Slides one line down.
    pub fn scroll_down(&mut self) {
        self.upper += 1;
        self.lower += 1;
    }
}

/// The two answers a [`ConfirmDialog`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    /// The accepting answer.
    Yes,
    /// The declining answer.
    #[default]
    No,
}

/// Tracks which choice is indicated and whether the user has indicated one
/// at all. Confirming is only possible after an explicit indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChoiceState {
    indicated: Choice,
    chosen: bool,
}

impl ChoiceState {
    /// Indicates a choice, unlocking confirmation.
    pub fn choose(&mut self, choice: Choice) {
        self.indicated = choice;
        self.chosen = true;
    }

    /// The currently indicated choice.
    pub fn indicated(&self) -> Choice {
        self.indicated
    }

    /// Whether a confirm key may end the dialog.
    pub fn can_confirm(&self) -> bool {
        self.chosen
    }
}

/// A blocking yes/no dialog with a scrollable body.
///
/// [`open`] draws the frame and the idle choice row; [`run`] pages through
/// the body and then reads the choice; [`close`] releases the region so the
/// surface underneath shows through again.
///
/// [`open`]: ConfirmDialog::open
/// [`run`]: ConfirmDialog::run
/// [`close`]: ConfirmDialog::close
pub struct ConfirmDialog {
    config: DialogConfig,
    lines: Vec<String>,
    region: Region,
    choice_region: Region,
    state: ChoiceState,
}

impl ConfirmDialog {
    /// Derives the dialog region from the screen and draws the idle dialog.
    ///
    /// Rejects a body with a reflowed line wider than the frame interior;
    /// reflow never splits a token, so a single oversized token cannot be
    /// rendered inside the frame.
    pub fn open(config: DialogConfig, screen: &mut impl Screen) -> Result<Self> {
        let lines = reflow(&config.body, usize::from(config.text_width));
        let interior = usize::from(config.rect.width) - 2;
        for line in &lines {
            let width = line.width();
            if width > interior {
                return Err(ConfigError::BodyLineTooWide { width, max: interior }.into());
            }
        }
        let root = Region::from_size(screen.size());
        let region = root.subregion(config.rect)?;
        let choice_rect = Rect::new(1, config.text_height + 1, config.rect.width - 2, 1);
        let choice_region = region.subregion(choice_rect)?;

        let dialog = Self {
            config,
            lines,
            region,
            choice_region,
            state: ChoiceState::default(),
        };
        screen.draw_frame(&dialog.region)?;
        dialog.draw_choice(screen, None)?;
        screen.refresh()?;

        debug!(rect = ?dialog.region.rect(), lines = dialog.lines.len(), "dialog opened");
        Ok(dialog)
    }

    /// Pages through the body, then blocks until the user confirms a choice.
    ///
    /// Returns `true` for the accepting choice. A confirm key before any
    /// yes/no key sounds the bell; there is no default answer.
    pub fn run(&mut self, screen: &mut impl Screen) -> Result<bool> {
        self.paginate(screen)?;
        let accepted = self.read_choice(screen)?;
        debug!(accepted, "dialog answered");
        Ok(accepted)
    }

    /// Releases the dialog region, clearing everything it drew.
    pub fn close(self, screen: &mut impl Screen) -> Result<()> {
        debug!(rect = ?self.region.rect(), "dialog closed");
        screen.release_region(self.region)
    }

    /// The reflowed body lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The dialog's region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    fn paginate(&mut self, screen: &mut impl Screen) -> Result<()> {
        let page_height = usize::from(self.config.text_height) - 1;
        if self.lines.len() <= page_height {
            self.draw_page(screen, 0..self.lines.len())?;
            return Ok(());
        }

        let mut window = ScrollWindow::new(page_height);
        while window.lower() <= self.lines.len() {
            self.draw_page(screen, window.range())?;
            let key = screen.next_key(&self.region, Point::ZERO)?;
            if self.config.up_keys.contains(key) {
                if window.scroll_up() {
                    trace!(upper = window.upper(), "scrolled up");
                } else {
                    screen.alert()?;
                }
            } else if self.config.down_keys.contains(key) {
                window.scroll_down();
                trace!(upper = window.upper(), "scrolled down");
            } else {
                trace!(key = %key, "ignored during pagination");
            }
        }
        Ok(())
    }

    fn draw_page(&self, screen: &mut impl Screen, range: Range<usize>) -> Result<()> {
        let interior = usize::from(self.config.rect.width) - 2;
        let mut at = Point::new(1, 1);
        for line in &self.lines[range] {
            let decorated = center_decorated(line, interior, self.config.fill);
            screen.write_text(&self.region, at, &decorated, Attributes::NONE)?;
            at = at.offset(0, 1);
        }
        screen.draw_frame(&self.region)?;
        screen.refresh()?;
        Ok(())
    }

    fn draw_choice(&self, screen: &mut impl Screen, highlighted: Option<Choice>) -> Result<()> {
        let half = (usize::from(self.config.rect.width) - 2) / 2;
        screen.erase_region(&self.choice_region)?;

        let yes = center_decorated(&self.config.yes_label, half, ' ');
        let yes_attrs = if highlighted == Some(Choice::Yes) {
            Attributes::BOLD
        } else {
            Attributes::NONE
        };
        screen.write_text(&self.choice_region, Point::ZERO, &yes, yes_attrs)?;

        let no = center_decorated(&self.config.no_label, half, ' ');
        let no_attrs = if highlighted == Some(Choice::No) {
            Attributes::BOLD
        } else {
            Attributes::NONE
        };
        let no_at = Point::new(half as u16, 0);
        screen.write_text(&self.choice_region, no_at, &no, no_attrs)?;

        screen.refresh()?;
        Ok(())
    }

    fn read_choice(&mut self, screen: &mut impl Screen) -> Result<bool> {
        loop {
            let key = screen.next_key(&self.choice_region, Point::ZERO)?;
            if self.config.yes_keys.contains(key) {
                self.state.choose(Choice::Yes);
                self.draw_choice(screen, Some(Choice::Yes))?;
            } else if self.config.no_keys.contains(key) {
                self.state.choose(Choice::No);
                self.draw_choice(screen, Some(Choice::No))?;
            } else if self.config.confirm_keys.contains(key) && self.state.can_confirm() {
                return Ok(self.state.indicated() == Choice::Yes);
            } else {
                screen.alert()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use termprompt_core::{Error, Size};
    use termprompt_screen::{KeyCode, ScriptedScreen};

    // 12x10 dialog: text field 9x6, one page shows 5 lines, choice row at
    // local y 7, interior width 10, each choice slot 5 wide.
    fn small_config(body: &str) -> DialogConfig {
        DialogConfig::builder()
            .rect(Rect::new(0, 0, 12, 10))
            .width_coeff(0.75)
            .height_coeff(0.6)
            .body(body)
            .build()
            .expect("valid config")
    }

    fn scripted(keys: &[KeyCode]) -> ScriptedScreen {
        ScriptedScreen::new(Size::new(30, 14), keys.iter().copied())
    }

    mod scroll_window_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_window_covers_first_page() {
            let window = ScrollWindow::new(5);
            assert_eq!(window.range(), 0..5);
            assert_eq!(window.page_height(), 5);
        }

        #[test]
        fn test_scroll_up_stops_at_top() {
            let mut window = ScrollWindow::new(3);
            assert!(!window.scroll_up());
            assert_eq!(window.range(), 0..3);

            window.scroll_down();
            assert!(window.scroll_up());
            assert_eq!(window.range(), 0..3);
        }

        #[test]
        fn test_scroll_down_slides_whole_window() {
            let mut window = ScrollWindow::new(4);
            window.scroll_down();
            window.scroll_down();
            assert_eq!(window.range(), 2..6);
            assert_eq!(window.page_height(), 4);
        }
    }

    mod choice_state_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cannot_confirm_before_choosing() {
            let state = ChoiceState::default();
            assert!(!state.can_confirm());
            assert_eq!(state.indicated(), Choice::No);
        }

        #[test]
        fn test_choose_unlocks_confirmation() {
            let mut state = ChoiceState::default();
            state.choose(Choice::Yes);
            assert!(state.can_confirm());
            assert_eq!(state.indicated(), Choice::Yes);
        }
    }

    mod config_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_geometry_resolves() {
            let config = DialogConfig::builder().build().expect("valid");
            assert_eq!(config.text_width(), 54);
            assert_eq!(config.text_height(), 17);
        }

        #[test]
        fn test_rejects_coefficient_above_one() {
            let result = DialogConfig::builder().width_coeff(1.2).build();
            assert_eq!(
                result.unwrap_err(),
                ConfigError::CoefficientOutOfRange {
                    name: "width_coeff",
                    value: 1.2
                }
            );
        }

        #[test]
        fn test_rejects_text_field_taller_than_rect_allows() {
            let result = DialogConfig::builder()
                .rect(Rect::new(0, 0, 12, 10))
                .height_coeff(0.8)
                .build();
            assert_eq!(
                result.unwrap_err(),
                ConfigError::TextFieldTooTall {
                    text_height: 8,
                    height: 10
                }
            );
        }

        #[test]
        fn test_rejects_label_wider_than_choice_slot() {
            let result = DialogConfig::builder()
                .rect(Rect::new(0, 0, 12, 10))
                .width_coeff(0.75)
                .height_coeff(0.6)
                .yes_label("<ACCEPT>")
                .build();
            assert_eq!(
                result.unwrap_err(),
                ConfigError::LabelTooWide { width: 8, max: 5 }
            );
        }

        #[test]
        fn test_rejects_tiny_rect() {
            let result = DialogConfig::builder().rect(Rect::new(0, 0, 3, 20)).build();
            assert_eq!(
                result.unwrap_err(),
                ConfigError::RectTooSmall { width: 3, height: 20 }
            );
        }
    }

    #[test]
    fn test_right_then_confirm_accepts() {
        let mut screen = scripted(&[KeyCode::Right, KeyCode::Enter]);
        let mut dialog = ConfirmDialog::open(small_config("ok"), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(accepted);
        assert_eq!(screen.alerts(), 0);
    }

    #[test]
    fn test_last_indication_wins() {
        let keys = [KeyCode::Left, KeyCode::Right, KeyCode::Left, KeyCode::Enter];
        let mut screen = scripted(&keys);
        let mut dialog = ConfirmDialog::open(small_config("ok"), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(!accepted);
    }

    #[test]
    fn test_confirm_without_indication_alerts() {
        let keys = [KeyCode::Enter, KeyCode::Char('y'), KeyCode::Enter];
        let mut screen = scripted(&keys);
        let mut dialog = ConfirmDialog::open(small_config("ok"), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(accepted);
        assert_eq!(screen.alerts(), 1);
    }

    #[test]
    fn test_single_page_body_needs_no_scrolling() {
        let mut screen = scripted(&[KeyCode::Char('y'), KeyCode::Enter]);
        let mut dialog =
            ConfirmDialog::open(small_config("alphabeta gama"), &mut screen).expect("open");

        assert_eq!(dialog.lines(), vec!["alphabeta", "gama"]);
        let accepted = dialog.run(&mut screen).expect("run");

        assert!(accepted);
        assert_eq!(screen.row_text(1), "│alphabeta*│");
        assert_eq!(screen.row_text(2), "│***gama***│");
    }

    #[test]
    fn test_body_exactly_one_page_needs_no_scrolling() {
        // five 9-wide tokens reflow to exactly one page
        let body = "aaaaaaaaa bbbbbbbbb ccccccccc ddddddddd eeeeeeeee";
        let mut screen = scripted(&[KeyCode::Char('y'), KeyCode::Enter]);
        let mut dialog = ConfirmDialog::open(small_config(body), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(accepted);
        assert_eq!(screen.remaining_keys(), 0);
        assert_eq!(screen.alerts(), 0);
        assert_eq!(screen.row_text(5), "│eeeeeeeee*│");
    }

    #[test]
    fn test_body_one_line_short_needs_no_scrolling() {
        let body = "aaaaaaaaa bbbbbbbbb ccccccccc ddddddddd";
        let mut screen = scripted(&[KeyCode::Char('n'), KeyCode::Enter]);
        let mut dialog = ConfirmDialog::open(small_config(body), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(!accepted);
        assert_eq!(screen.remaining_keys(), 0);
        assert_eq!(screen.row_text(4), "│ddddddddd*│");
        assert_eq!(screen.row_text(5), "│          │");
    }

    #[test]
    fn test_long_body_scrolls_to_bottom_before_choice() {
        // six 9-wide tokens reflow to six lines, one more than a page
        let body = "aaaaaaaaa bbbbbbbbb ccccccccc ddddddddd eeeeeeeee fffffffff";
        let keys = [
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('n'),
            KeyCode::Enter,
        ];
        let mut screen = scripted(&keys);
        let mut dialog = ConfirmDialog::open(small_config(body), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(!accepted);
        // final page shows lines 1..6
        assert_eq!(screen.row_text(1), "│bbbbbbbbb*│");
        assert_eq!(screen.row_text(5), "│fffffffff*│");
    }

    #[test]
    fn test_scroll_up_at_top_alerts() {
        let body = "aaaaaaaaa bbbbbbbbb ccccccccc ddddddddd eeeeeeeee fffffffff";
        let keys = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Char('y'),
            KeyCode::Enter,
        ];
        let mut screen = scripted(&keys);
        let mut dialog = ConfirmDialog::open(small_config(body), &mut screen).expect("open");

        let accepted = dialog.run(&mut screen).expect("run");

        assert!(accepted);
        assert_eq!(screen.alerts(), 1);
    }

    #[test]
    fn test_choice_row_highlights_after_indication() {
        let mut screen = scripted(&[KeyCode::Char('y'), KeyCode::Enter]);
        let mut dialog = ConfirmDialog::open(small_config("ok"), &mut screen).expect("open");

        // idle choice row: both labels plain
        assert_eq!(screen.row_text(7), "│<YES><NO> │");
        assert_eq!(screen.cell(1, 7).attrs, Attributes::NONE);

        dialog.run(&mut screen).expect("run");

        assert_eq!(screen.cell(1, 7).attrs, Attributes::BOLD);
        assert_eq!(screen.cell(6, 7).attrs, Attributes::NONE);
    }

    #[test]
    fn test_body_token_wider_than_interior_rejected_at_open() {
        // "abcdefghijk" cannot wrap at width 9 and exceeds the 10 cell interior
        let mut screen = scripted(&[]);

        let result = ConfirmDialog::open(small_config("abcdefghijk"), &mut screen);

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::BodyLineTooWide { width: 11, max: 10 }))
        ));
        assert_eq!(screen.row_text(0), "");
    }

    #[test]
    fn test_close_releases_region() {
        let mut screen = scripted(&[KeyCode::Char('y'), KeyCode::Enter]);
        let mut dialog = ConfirmDialog::open(small_config("ok"), &mut screen).expect("open");
        dialog.run(&mut screen).expect("run");

        dialog.close(&mut screen).expect("close");

        assert_eq!(screen.row_text(0), "");
        assert_eq!(screen.row_text(7), "");
        assert_eq!(screen.released(), &[Rect::new(0, 0, 12, 10)]);
    }
}
