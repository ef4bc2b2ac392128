//! Text attributes for terminal cell rendering.
//!
//! Widgets describe how a cell should look with [`Attributes`]; surface
//! implementations translate the flags into whatever their terminal layer
//! understands. The widgets in this workspace only ever set [`Attributes::BOLD`]
//! (titles, the highlighted choice label) and [`Attributes::REVERSE`] (input
//! field cells), but the full conventional set is available.

use bitflags::bitflags;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// Attributes combine with bitwise operations:
    ///
    /// ```
    /// use termprompt_core::style::Attributes;
    ///
    /// let attrs = Attributes::BOLD | Attributes::REVERSE;
    /// assert!(attrs.contains(Attributes::BOLD));
    /// assert!(!attrs.contains(Attributes::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Dim/faint text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text (rarely supported in modern terminals).
        const BLINK         = 0b0001_0000;
        /// Reverse/inverse video (swap fg and bg colors).
        const REVERSE       = 0b0010_0000;
        /// Hidden/invisible text.
        const HIDDEN        = 0b0100_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl Attributes {
    /// No attributes set (alias for `empty()`).
    pub const NONE: Self = Self::empty();

    /// Returns `true` if no attributes are set.
    #[inline]
    pub fn is_none(self) -> bool {
        self.is_empty()
    }

    /// Returns `true` if any attribute is set.
    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_none() {
        assert_eq!(Attributes::NONE, Attributes::empty());
        assert!(Attributes::NONE.is_none());
        assert!(!Attributes::NONE.is_some());
    }

    #[test]
    fn test_attributes_combine() {
        let attrs = Attributes::BOLD | Attributes::REVERSE;
        assert!(attrs.is_some());
        assert!(attrs.contains(Attributes::BOLD));
        assert!(attrs.contains(Attributes::REVERSE));
        assert!(!attrs.contains(Attributes::UNDERLINE));
    }

    #[test]
    fn test_attributes_default_is_none() {
        assert_eq!(Attributes::default(), Attributes::NONE);
    }
}
