//! Terminal surface abstraction for termprompt.
//!
//! This crate provides the surface layer the widget crate draws on:
//!
//! - [`Screen`]: the abstract surface trait (cell writes, frames, the bell,
//!   blocking key reads)
//! - [`CrosstermScreen`]: the real implementation over standard output
//! - [`ScriptedScreen`]: a deterministic in-memory implementation for tests
//! - [`TerminalSession`]: scoped raw-mode/alternate-screen acquisition
//! - [`KeyCode`] and [`Keymap`]: key events and the key sets widgets match on
//!
//! Widgets depend only on the [`Screen`] trait; which implementation they run
//! against is the host program's choice.
//!
//! # Example
//!
//! ```
//! use termprompt_core::{Attributes, Point, Region, Size};
//! use termprompt_screen::{KeyCode, Screen, ScriptedScreen};
//!
//! let mut screen = ScriptedScreen::new(Size::new(20, 4), [KeyCode::Enter]);
//! let root = Region::from_size(screen.size());
//!
//! screen.write_text(&root, Point::ZERO, "ready", Attributes::BOLD).unwrap();
//! assert_eq!(screen.row_text(0), "ready");
//! assert_eq!(screen.next_key(&root, Point::ZERO).unwrap(), KeyCode::Enter);
//! ```

mod backend;
mod key;
mod screen;
mod scripted;
mod session;

pub use backend::CrosstermScreen;
pub use key::{KeyCode, Keymap};
pub use screen::{FrameChars, Screen};
pub use scripted::{Cell, ScriptedScreen};
pub use session::TerminalSession;

/// Re-export core types for convenience.
pub use termprompt_core::{Attributes, Error, Point, Rect, Region, Result, Size};
