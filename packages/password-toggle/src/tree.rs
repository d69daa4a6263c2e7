//! The host's element tree.
//!
//! The toggle never owns elements. It resolves them through an [`ElementTree`] for the duration of a
//! single call and drops the handles on return. To run the toggle against some new kind of UI tree,
//! implement this trait for it. The crate ships a [`MemoryTree`](crate::MemoryTree) and, with the
//! `web` feature, a `WebTree` backed by the browser document.

use crate::InputMode;

/// Identifier-addressable lookup and mutation of checkbox and password-field controls.
pub trait ElementTree {
    /// An opaque, borrowed reference to a live element.
    type Handle;

    /// Resolve an element by its identifier, returning [`None`] if no such element exists.
    ///
    /// A failed lookup must not panic or raise.
    #[must_use]
    fn lookup_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Read the checked state of a checkable control.
    ///
    /// Elements that cannot be checked read as unchecked.
    #[must_use]
    fn is_checked(&self, element: &Self::Handle) -> bool;

    /// Set the rendering mode of a text-entry control.
    ///
    /// What happens when `element` is not a text-entry control is up to the tree. The browser tree
    /// writes the `type` attribute regardless, so pointing the field id at the checkbox itself turns
    /// the checkbox into a text input. [`MemoryTree`](crate::MemoryTree) records the write and leaves
    /// non-field elements unchanged.
    fn set_input_mode(&self, element: &Self::Handle, mode: InputMode);

    /// Read the current rendering mode of a text-entry control, if it has one.
    #[must_use]
    fn input_mode(&self, element: &Self::Handle) -> Option<InputMode>;
}
