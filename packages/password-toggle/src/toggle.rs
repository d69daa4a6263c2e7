use crate::{ElementRole, ElementTree, InputMode, ToggleError};

/// Synchronize a password field's rendering mode with a checkbox.
///
/// If the checkbox is checked the field switches to [`InputMode::PlainText`], otherwise to
/// [`InputMode::Masked`]. If either identifier fails to resolve nothing is mutated and the call
/// returns normally.
///
/// This is meant to run as the checkbox's change handler. Every call looks both elements up again,
/// so calling it repeatedly with an unchanged checkbox leaves the field as it was after the first call.
///
/// ```rust
/// # use password_toggle::{toggle_password, InputMode, MemoryTree};
/// let tree = MemoryTree::new()
///     .with_checkbox("showPwd", false)
///     .with_field("pwd", InputMode::Masked);
///
/// tree.set_checked("showPwd", true);
/// toggle_password(&tree, "showPwd", "pwd");
/// assert_eq!(tree.mode_of("pwd"), Some(InputMode::PlainText));
///
/// // a checkbox that doesn't exist leaves the field alone
/// toggle_password(&tree, "ghostCheckbox", "pwd");
/// assert_eq!(tree.mode_of("pwd"), Some(InputMode::PlainText));
/// ```
pub fn toggle_password<T: ElementTree + ?Sized>(tree: &T, checkbox_id: &str, field_id: &str) {
    if let Err(err) = try_toggle_password(tree, checkbox_id, field_id) {
        tracing::trace!(%err, "skipping password toggle");
    }
}

/// Like [`toggle_password`], but reports which lookup failed instead of swallowing it.
///
/// On success returns the mode the field was set to. Both elements are resolved before anything is
/// written, so an error always means the tree was left untouched.
pub fn try_toggle_password<T: ElementTree + ?Sized>(
    tree: &T,
    checkbox_id: &str,
    field_id: &str,
) -> Result<InputMode, ToggleError> {
    let checkbox = tree
        .lookup_by_id(checkbox_id)
        .ok_or_else(|| ToggleError::not_found(checkbox_id, ElementRole::Checkbox))?;
    let field = tree
        .lookup_by_id(field_id)
        .ok_or_else(|| ToggleError::not_found(field_id, ElementRole::PasswordField))?;

    let mode = InputMode::from_checked(tree.is_checked(&checkbox));
    tree.set_input_mode(&field, mode);
    tracing::trace!(checkbox = checkbox_id, field = field_id, %mode, "password field synchronized");

    Ok(mode)
}
