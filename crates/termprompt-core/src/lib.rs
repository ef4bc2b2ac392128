//! Core types for termprompt.
//!
//! This crate provides the fundamental building blocks shared by the termprompt
//! widget crates:
//!
//! - [`geometry`]: 2D cell geometry (Point, Size, Rect) and drawing regions
//! - [`style`]: text attributes (bold, reverse, etc.)
//! - [`error`]: error types for surface and configuration failures
//!
//! # Examples
//!
//! ## Deriving a drawing region
//!
//! ```
//! use termprompt_core::geometry::{Point, Rect, Region, Size};
//!
//! let screen = Region::from_size(Size::new(80, 24));
//! let child = screen.subregion(Rect::new(5, 3, 20, 10)).unwrap();
//!
//! // Local coordinates translate to absolute screen cells.
//! assert_eq!(child.to_absolute(Point::ZERO), Point::new(5, 3));
//! assert_eq!(child.size(), Size::new(20, 10));
//! ```
//!
//! ## Combining attributes
//!
//! ```
//! use termprompt_core::style::Attributes;
//!
//! let attrs = Attributes::BOLD | Attributes::REVERSE;
//! assert!(attrs.contains(Attributes::BOLD));
//! assert!(!attrs.contains(Attributes::UNDERLINE));
//! ```

pub mod error;
pub mod geometry;
pub mod style;

pub use error::{ConfigError, Error, GeometryError, Result};
pub use geometry::{Point, Rect, Region, Size};
pub use style::Attributes;
