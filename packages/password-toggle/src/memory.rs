use std::{cell::RefCell, collections::BTreeMap};

use crate::{ElementTree, InputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryElement {
    Checkbox { checked: bool },
    Field { mode: InputMode },
}

#[derive(Default)]
struct MemoryTreeState {
    elements: BTreeMap<String, MemoryElement>,
    mutations: Vec<(String, InputMode)>,
}

/// A handle to an element in a [`MemoryTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHandle(String);

/// An [`ElementTree`] that keeps its checkboxes and password fields in memory.
///
/// Useful for running the toggle outside a browser and for testing code built on top of it. Every
/// call to [`ElementTree::set_input_mode`] is recorded and can be inspected with
/// [`MemoryTree::mutations`].
#[derive(Default)]
pub struct MemoryTree {
    state: RefCell<MemoryTreeState>,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a checkbox, replacing any element that already has this id.
    pub fn with_checkbox(self, id: impl ToString, checked: bool) -> Self {
        self.insert(id.to_string(), MemoryElement::Checkbox { checked });
        self
    }

    /// Add a text-entry field, replacing any element that already has this id.
    pub fn with_field(self, id: impl ToString, mode: InputMode) -> Self {
        self.insert(id.to_string(), MemoryElement::Field { mode });
        self
    }

    /// Simulate the user clicking a checkbox. Does nothing if `id` is not a checkbox.
    pub fn set_checked(&self, id: &str, checked: bool) {
        let mut state = self.state.borrow_mut();
        if let Some(MemoryElement::Checkbox { checked: current }) = state.elements.get_mut(id) {
            *current = checked;
        }
    }

    /// The checked state of the checkbox with this id.
    pub fn is_checked_by_id(&self, id: &str) -> Option<bool> {
        match self.state.borrow().elements.get(id) {
            Some(MemoryElement::Checkbox { checked }) => Some(*checked),
            _ => None,
        }
    }

    /// The rendering mode of the field with this id.
    pub fn mode_of(&self, id: &str) -> Option<InputMode> {
        match self.state.borrow().elements.get(id) {
            Some(MemoryElement::Field { mode }) => Some(*mode),
            _ => None,
        }
    }

    /// Every `(id, mode)` written through [`ElementTree::set_input_mode`], oldest first.
    pub fn mutations(&self) -> Vec<(String, InputMode)> {
        self.state.borrow().mutations.clone()
    }

    fn insert(&self, id: String, element: MemoryElement) {
        self.state.borrow_mut().elements.insert(id, element);
    }
}

impl ElementTree for MemoryTree {
    type Handle = MemoryHandle;

    fn lookup_by_id(&self, id: &str) -> Option<MemoryHandle> {
        self.state
            .borrow()
            .elements
            .contains_key(id)
            .then(|| MemoryHandle(id.to_string()))
    }

    fn is_checked(&self, element: &MemoryHandle) -> bool {
        self.is_checked_by_id(&element.0).unwrap_or(false)
    }

    fn set_input_mode(&self, element: &MemoryHandle, mode: InputMode) {
        let mut state = self.state.borrow_mut();
        state.mutations.push((element.0.clone(), mode));
        // writing a mode onto a checkbox is recorded but has no effect
        if let Some(MemoryElement::Field { mode: current }) = state.elements.get_mut(&element.0) {
            *current = mode;
        }
    }

    fn input_mode(&self, element: &MemoryHandle) -> Option<InputMode> {
        self.mode_of(&element.0)
    }
}
