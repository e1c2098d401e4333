use std::fmt;

/// A CSS length value.
///
/// Numeric values render with a `px` suffix; strings pass through verbatim,
/// so percentages, `rem` values, and keywords like `auto` all work.
#[derive(Debug, Clone, PartialEq)]
pub enum Size {
    /// Pixel length, rendered as `{n}px`.
    Px(f64),
    /// Literal CSS length or percentage, used as-is.
    Css(String),
}

impl Size {
    /// Pixel length.
    pub fn px(value: f64) -> Self {
        Size::Px(value)
    }

    /// Literal CSS length string.
    pub fn css(value: impl Into<String>) -> Self {
        Size::Css(value.into())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Px(n) => write!(f, "{n}px"),
            Size::Css(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Size {
    fn from(value: f64) -> Self {
        Size::Px(value)
    }
}

impl From<i32> for Size {
    fn from(value: i32) -> Self {
        Size::Px(value.into())
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        Size::Css(value.to_string())
    }
}

impl From<String> for Size {
    fn from(value: String) -> Self {
        Size::Css(value)
    }
}
