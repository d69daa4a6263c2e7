//! The login-form walkthroughs: a "show password" box next to a password input.

use password_toggle::{
    toggle_password, try_toggle_password, ElementRole, ElementTree, InputMode, MemoryTree,
    ToggleError,
};
use pretty_assertions::assert_eq;

fn login_page() -> MemoryTree {
    MemoryTree::new()
        .with_field("full_name", InputMode::PlainText)
        .with_field("pwd", InputMode::Masked)
        .with_checkbox("showPwd", false)
}

#[test]
fn checking_the_box_reveals_the_password() {
    let page = login_page();

    page.set_checked("showPwd", true);
    toggle_password(&page, "showPwd", "pwd");

    assert_eq!(page.mode_of("pwd"), Some(InputMode::PlainText));
}

#[test]
fn unchecked_box_keeps_the_password_masked() {
    let page = login_page();

    toggle_password(&page, "showPwd", "pwd");

    assert_eq!(page.mode_of("pwd"), Some(InputMode::Masked));
    assert_eq!(page.mutations(), vec![("pwd".to_string(), InputMode::Masked)]);
}

#[test]
fn ghost_checkbox_changes_nothing() {
    let page = login_page();
    page.set_checked("showPwd", true);

    toggle_password(&page, "ghostCheckbox", "pwd");

    assert_eq!(page.mode_of("pwd"), Some(InputMode::Masked));
    assert!(page.mutations().is_empty());
}

#[test]
fn ghost_field_changes_nothing() {
    let page = login_page();
    page.set_checked("showPwd", true);

    toggle_password(&page, "showPwd", "ghostField");

    assert!(page.mutations().is_empty());
    assert_eq!(page.mode_of("pwd"), Some(InputMode::Masked));
    assert_eq!(page.mode_of("full_name"), Some(InputMode::PlainText));
}

#[test]
fn following_a_sequence_of_clicks() {
    let page = login_page();
    let clicks = [true, true, false, true, false, false];

    for checked in clicks {
        page.set_checked("showPwd", checked);
        toggle_password(&page, "showPwd", "pwd");
        assert_eq!(page.mode_of("pwd"), Some(InputMode::from_checked(checked)));
    }

    let written: Vec<_> = page.mutations().into_iter().map(|(_, mode)| mode).collect();
    let expected: Vec<_> = clicks.into_iter().map(InputMode::from_checked).collect();
    assert_eq!(written, expected);
    assert!(page.mutations().iter().all(|(id, _)| id == "pwd"));
}

#[test]
fn registration_form_with_two_password_fields() {
    let page = MemoryTree::new()
        .with_field("password", InputMode::Masked)
        .with_checkbox("showPassword", true)
        .with_field("confirm_password", InputMode::Masked)
        .with_checkbox("showConfirm", false);

    toggle_password(&page, "showPassword", "password");
    toggle_password(&page, "showConfirm", "confirm_password");

    assert_eq!(page.mode_of("password"), Some(InputMode::PlainText));
    assert_eq!(page.mode_of("confirm_password"), Some(InputMode::Masked));
}

/// A tree whose elements are plain integers, to check the toggle only goes through the trait.
struct Slots {
    checked: bool,
    mode: std::cell::Cell<InputMode>,
}

impl ElementTree for Slots {
    type Handle = u8;

    fn lookup_by_id(&self, id: &str) -> Option<u8> {
        match id {
            "box" => Some(0),
            "field" => Some(1),
            _ => None,
        }
    }

    fn is_checked(&self, element: &u8) -> bool {
        *element == 0 && self.checked
    }

    fn set_input_mode(&self, element: &u8, mode: InputMode) {
        assert_eq!(*element, 1, "only the field may be written");
        self.mode.set(mode);
    }

    fn input_mode(&self, element: &u8) -> Option<InputMode> {
        (*element == 1).then(|| self.mode.get())
    }
}

#[test]
fn custom_trees_are_supported() {
    let slots = Slots {
        checked: true,
        mode: InputMode::Masked.into(),
    };

    assert_eq!(
        try_toggle_password(&slots, "box", "field"),
        Ok(InputMode::PlainText)
    );
    assert_eq!(slots.input_mode(&1), Some(InputMode::PlainText));

    assert_eq!(
        try_toggle_password(&slots, "box", "nope"),
        Err(ToggleError::ElementNotFound {
            id: "nope".to_string(),
            role: ElementRole::PasswordField,
        })
    );
    assert_eq!(slots.mode.get(), InputMode::PlainText);
}
