use std::fmt;

/// Which of the two elements a lookup was trying to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// The "show password" checkbox.
    Checkbox,
    /// The password input whose rendering mode follows the checkbox.
    PasswordField,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Checkbox => f.write_str("checkbox"),
            ElementRole::PasswordField => f.write_str("password field"),
        }
    }
}

/// An error that can occur while synchronizing a password field with its checkbox.
///
/// [`toggle_password`](crate::toggle_password) never surfaces these; they are only returned by
/// [`try_toggle_password`](crate::try_toggle_password) and by parsing an [`InputMode`](crate::InputMode).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// No element with the given id exists in the tree.
    #[error("no {role} with id {id:?} in the element tree")]
    ElementNotFound {
        /// The id that failed to resolve.
        id: String,
        /// What the element was expected to be.
        role: ElementRole,
    },

    /// A `type` attribute that is neither `password` nor `text`.
    #[error("{0:?} is not a masked or plain-text input type")]
    UnknownInputType(String),
}

impl ToggleError {
    pub(crate) fn not_found(id: &str, role: ElementRole) -> Self {
        Self::ElementNotFound {
            id: id.to_string(),
            role,
        }
    }
}
