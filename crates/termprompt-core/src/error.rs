//! Error types for termprompt operations.

use thiserror::Error;

/// Core error type for surface operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal operation failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// A draw call landed outside its region.
    #[error("write outside region: ({x}, {y}) in {width}x{height}")]
    OutOfRegion {
        /// The local column of the write.
        x: u16,
        /// The local row of the write.
        y: u16,
        /// The region width.
        width: u16,
        /// The region height.
        height: u16,
    },

    /// Widget configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Region geometry was rejected.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for widget configuration.
///
/// Configuration is validated when a config value is built; a degenerate
/// configuration never reaches rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The allow-list of accepted characters is empty.
    #[error("allow-list is empty")]
    EmptyAllowList,

    /// The input field length is zero.
    #[error("field length must be positive")]
    ZeroFieldLength,

    /// The widget rectangle is too small to hold the widget.
    #[error("window rectangle too small: {width}x{height}")]
    RectTooSmall {
        /// The rectangle width.
        width: u16,
        /// The rectangle height.
        height: u16,
    },

    /// The field content does not fit the configured rectangle.
    #[error("field content {width}x{height} exceeds its {rect_width}x{rect_height} rectangle")]
    ContentTooLarge {
        /// The shrink-wrapped content width.
        width: u16,
        /// The shrink-wrapped content height.
        height: u16,
        /// The rectangle width.
        rect_width: u16,
        /// The rectangle height.
        rect_height: u16,
    },

    /// A keymap has no keys bound.
    #[error("{name} keymap is empty")]
    EmptyKeymap {
        /// Which keymap was empty.
        name: &'static str,
    },

    /// A sizing coefficient is outside (0, 1].
    #[error("{name} coefficient {value} outside (0, 1]")]
    CoefficientOutOfRange {
        /// Which coefficient was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The dialog text field computes to a degenerate size.
    #[error("text field computes to degenerate size: {width}x{height}")]
    DegenerateTextField {
        /// The computed text field width.
        width: u16,
        /// The computed text field height.
        height: u16,
    },

    /// The dialog text field leaves no room for the choice row.
    #[error("text field height {text_height} leaves no room for the choice row in {height} rows")]
    TextFieldTooTall {
        /// The computed text field height.
        text_height: u16,
        /// The dialog height.
        height: u16,
    },

    /// A choice label does not fit its half of the choice row.
    #[error("choice label {width} columns wide exceeds its half-row of {max} columns")]
    LabelTooWide {
        /// The label display width.
        width: usize,
        /// The columns available to it.
        max: usize,
    },

    /// A reflowed body line does not fit the dialog interior.
    #[error("body line {width} columns wide exceeds the {max} column interior")]
    BodyLineTooWide {
        /// The line display width.
        width: usize,
        /// The interior width in columns.
        max: usize,
    },
}

/// Error type for region geometry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A child rectangle does not fit inside its parent region.
    #[error("subregion ({x}, {y}) {width}x{height} exceeds its parent")]
    RegionOutOfBounds {
        /// The child x offset within the parent.
        x: u16,
        /// The child y offset within the parent.
        y: u16,
        /// The child width.
        width: u16,
        /// The child height.
        height: u16,
    },

    /// Invalid rectangle dimensions.
    #[error("invalid rectangle dimensions: width={width}, height={height}")]
    InvalidDimensions {
        /// The width.
        width: u16,
        /// The height.
        height: u16,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
