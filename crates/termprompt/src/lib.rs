//! Blocking prompt widgets for terminal programs.
//!
//! This crate bundles the termprompt stack under one roof:
//!
//! - [`core`]: geometry, regions, attributes and errors
//! - [`screen`]: the drawing surface trait and its crossterm backend
//! - [`text`]: word wrapping and centering helpers
//! - [`widgets`]: the input field and confirmation dialog
//!
//! Most programs only need the [`prelude`]:
//!
//! ```no_run
//! use termprompt::prelude::*;
//!
//! fn ask() -> termprompt::core::Result<bool> {
//!     let session = TerminalSession::begin()?;
//!     let mut screen = CrosstermScreen::new()?;
//!     let config = DialogConfig::builder()
//!         .rect(Rect::new(10, 2, 60, 20))
//!         .body("Overwrite the stored calibration?")
//!         .build()?;
//!     let mut dialog = ConfirmDialog::open(config, &mut screen)?;
//!     let accepted = dialog.run(&mut screen)?;
//!     dialog.close(&mut screen)?;
//!     session.end()?;
//!     Ok(accepted)
//! }
//! ```

pub use termprompt_core as core;
pub use termprompt_screen as screen;
pub use termprompt_text as text;
pub use termprompt_widgets as widgets;

/// The types most programs use.
pub mod prelude {
    pub use termprompt_core::{Attributes, Point, Rect, Region, Result, Size};
    pub use termprompt_screen::{CrosstermScreen, KeyCode, Keymap, Screen, TerminalSession};
    pub use termprompt_widgets::{ConfirmDialog, DialogConfig, FieldConfig, InputField};
}
