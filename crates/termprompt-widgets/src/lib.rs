//! Blocking terminal widgets: a validated input field and a yes/no
//! confirmation dialog.
//!
//! Both widgets draw into a [`Region`](termprompt_screen::Region) derived
//! from a parent surface and run their own blocking key loop. Nothing here
//! spawns threads or polls: a widget owns the keyboard from the moment its
//! loop starts until it returns.
//!
//! ```
//! use termprompt_screen::{KeyCode, ScriptedScreen, Screen, Size};
//! use termprompt_widgets::{FieldConfig, InputField};
//!
//! let mut screen = ScriptedScreen::new(
//!     Size::new(40, 12),
//!     [KeyCode::Char('4'), KeyCode::Char('2'), KeyCode::Enter],
//! );
//! let root = termprompt_screen::Region::from_size(screen.size());
//!
//! let config = FieldConfig::builder().label("Gain").build().unwrap();
//! let mut field = InputField::open(config, &mut screen, &root).unwrap();
//! let answer = field.read_input(&mut screen).unwrap();
//! assert_eq!(answer, "42");
//! ```

pub mod dialog;
pub mod field;

pub use dialog::{
    Choice, ChoiceState, ConfirmDialog, DialogConfig, DialogConfigBuilder, ScrollWindow,
};
pub use field::{FieldConfig, FieldConfigBuilder, FieldLayout, InputField};
