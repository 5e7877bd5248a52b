//! Shared read/write bindings between caller and alert
//!
//! The alert never owns presentation state: visibility, toggle activation,
//! and text-field content all live with the caller and are handed to the
//! component as cloneable handles. Everything runs on the single UI thread,
//! so plain `Rc<Cell<_>>` / `Rc<RefCell<_>>` are sufficient - there is no
//! cross-thread access to synchronize.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A caller-owned boolean the alert can read and write.
///
/// Used for the visibility flag (the alert writes `false` on action-button
/// presses, never `true`) and for toggle-button active states (the alert
/// only reads those; the caller's activation callback decides whether to
/// flip them).
#[derive(Clone, Default)]
pub struct SharedFlag(Rc<Cell<bool>>);

impl SharedFlag {
    /// Create a new flag with the given initial value.
    pub fn new(value: bool) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    /// Read the current value.
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Write a new value.
    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Flip the current value.
    pub fn toggle(&self) {
        self.0.set(!self.0.get());
    }
}

impl std::fmt::Debug for SharedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedFlag").field(&self.get()).finish()
    }
}

/// A caller-owned text value the alert can read and edit.
///
/// Backs the optional text-entry field. The caller keeps its own clone and
/// reads the final value out of it after the confirm action fires.
#[derive(Clone, Default)]
pub struct SharedText(Rc<RefCell<String>>);

impl SharedText {
    /// Create a new text binding with the given initial content.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    /// Copy out the current content.
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    /// Replace the content.
    pub fn set(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    /// Append a character at the end.
    pub fn push_char(&self, c: char) {
        self.0.borrow_mut().push(c);
    }

    /// Remove the last character, if any.
    pub fn pop_char(&self) {
        self.0.borrow_mut().pop();
    }

    /// Whether the content is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.borrow().trim().is_empty()
    }

    /// Character count of the current content.
    pub fn len_chars(&self) -> usize {
        self.0.borrow().chars().count()
    }
}

impl std::fmt::Debug for SharedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedText").field(&self.0.borrow()).finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
