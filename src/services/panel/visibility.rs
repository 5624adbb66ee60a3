use std::{fmt, str::FromStr};

/// Focus state reported by the host surface the panel lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Surface gained focus
    Focused,
    /// Surface lost focus
    Blurred,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focused => write!(f, "focused"),
            Self::Blurred => write!(f, "blurred"),
        }
    }
}

/// A focus signal name that is neither focus nor blur
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown visibility signal '{0}', expected 'focus' or 'blur'")]
pub struct ParseVisibilityError(String);

impl FromStr for Visibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "focus" | "focused" => Ok(Self::Focused),
            "blur" | "blurred" => Ok(Self::Blurred),
            _ => Err(ParseVisibilityError(s.trim().to_string())),
        }
    }
}
