//! Text reflow for termprompt dialogs.
//!
//! This crate turns raw prose into lines that fit a fixed-width text field:
//!
//! - [`reflow`]: greedy word-wrap that never splits a token
//! - [`center_decorated`]: cosmetic centering within a fill-character border
//!
//! Widths are display widths (Unicode-aware), not byte or char counts.
//!
//! # Example
//!
//! ```
//! use termprompt_text::{center_decorated, reflow};
//!
//! let lines = reflow("the quick brown fox", 9);
//! assert_eq!(lines, vec!["the quick", "brown fox"]);
//!
//! assert_eq!(center_decorated("fox", 9, '*'), "***fox***");
//! ```

pub mod reflow;

pub use reflow::{center_decorated, reflow};
