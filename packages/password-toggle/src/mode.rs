use std::{fmt, str::FromStr};

use crate::ToggleError;

/// How a text-entry control renders the characters typed into it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Characters are obscured, e.g. shown as dots. This is the default.
    #[default]
    Masked,

    /// Characters are shown verbatim.
    PlainText,
}

impl InputMode {
    /// The mode a password field should take for a given checkbox state.
    ///
    /// ```rust
    /// # use password_toggle::InputMode;
    /// assert_eq!(InputMode::from_checked(true), InputMode::PlainText);
    /// assert_eq!(InputMode::from_checked(false), InputMode::Masked);
    /// ```
    pub const fn from_checked(checked: bool) -> Self {
        match checked {
            true => Self::PlainText,
            false => Self::Masked,
        }
    }

    /// The value of the HTML `type` attribute that selects this mode.
    pub const fn as_type_attr(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::PlainText => "text",
        }
    }

    /// Whether typed characters are visible in this mode.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::PlainText)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_type_attr())
    }
}

impl FromStr for InputMode {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = s.trim();
        if ty.eq_ignore_ascii_case("password") {
            Ok(Self::Masked)
        } else if ty.eq_ignore_ascii_case("text") {
            Ok(Self::PlainText)
        } else {
            Err(ToggleError::UnknownInputType(s.to_string()))
        }
    }
}

impl TryFrom<&str> for InputMode {
    type Error = ToggleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
