//! Indentation configuration for generated Java.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Two spaces per level.
    pub const JAVA: Self = Self::Spaces(2);

    /// String for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl From<u8> for Indent {
    /// `0` selects tabs, anything else that many spaces.
    fn from(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from(4), Indent::Spaces(4));
        assert_eq!(Indent::from(0), Indent::Tab);
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }
}
