//! Alert configuration types
//!
//! `AlertConfig` is an inert description of one alert: title, optional
//! icon/message/text-field/toggle sections, and the two mandatory action
//! buttons. The caller constructs it immediately before presentation;
//! nothing here is retained by the component after dismissal.

use crate::binding::{SharedFlag, SharedText};

/// Default label rendered above the text-entry box.
pub const DEFAULT_FIELD_LABEL: &str = "NAME";

/// A required action button: label text plus confirm callback.
pub struct ActionButton {
    /// Button label
    pub text: String,
    on_press: Box<dyn FnMut()>,
}

impl ActionButton {
    /// Create an action button with the given label and press callback.
    pub fn new(text: impl Into<String>, on_press: impl FnMut() + 'static) -> Self {
        Self {
            text: text.into(),
            on_press: Box::new(on_press),
        }
    }

    /// Invoke the press callback.
    pub(crate) fn press(&mut self) {
        (self.on_press)();
    }
}

impl std::fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionButton")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// An optional toggle-style icon button (e.g. favorite, pin).
///
/// The active state is read from the caller-owned flag on every render;
/// pressing the toggle only invokes the callback - the caller decides
/// whether the flag flips. Visibility is never affected.
pub struct ToggleButton {
    /// Label text shown next to the icon
    pub text: String,
    /// Icon glyph shown before the label
    pub icon: String,
    /// Caller-owned active state, read at render time
    pub active: SharedFlag,
    on_activate: Box<dyn FnMut()>,
}

impl ToggleButton {
    /// Create a toggle button.
    pub fn new(
        text: impl Into<String>,
        icon: impl Into<String>,
        active: SharedFlag,
        on_activate: impl FnMut() + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
            active,
            on_activate: Box::new(on_activate),
        }
    }

    /// Invoke the activation callback.
    pub(crate) fn activate(&mut self) {
        (self.on_activate)();
    }
}

impl std::fmt::Debug for ToggleButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleButton")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// Descriptor for the optional text-entry field.
#[derive(Debug, Clone)]
pub struct TextFieldParams {
    /// Small label rendered above the input box
    pub label: String,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Caller-owned text content
    pub value: SharedText,
}

impl TextFieldParams {
    /// Create a text-field descriptor with the default field label.
    pub fn new(placeholder: impl Into<String>, value: SharedText) -> Self {
        Self {
            label: DEFAULT_FIELD_LABEL.to_string(),
            placeholder: placeholder.into(),
            value,
        }
    }

    /// Override the field label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Full description of one alert.
///
/// The two action buttons are constructor arguments, so a configuration
/// without them cannot be represented. Every other field is independently
/// optional; an absent field simply suppresses its visual section.
pub struct AlertConfig {
    /// Title shown in the first row
    pub title: String,
    /// Optional icon glyph rendered at the right edge of the title row
    pub icon: Option<String>,
    /// Optional message block below the title
    pub message: Option<String>,
    /// Optional text-entry field
    pub text_field: Option<TextFieldParams>,
    /// Optional left toggle button
    pub left_label: Option<ToggleButton>,
    /// Optional right toggle button
    pub right_label: Option<ToggleButton>,
    /// Cancel-style left action button
    pub left_button: ActionButton,
    /// Confirm-style right action button
    pub right_button: ActionButton,
}

impl AlertConfig {
    /// Create an alert configuration with the mandatory parts.
    pub fn new(
        title: impl Into<String>,
        left_button: ActionButton,
        right_button: ActionButton,
    ) -> Self {
        Self {
            title: title.into(),
            icon: None,
            message: None,
            text_field: None,
            left_label: None,
            right_label: None,
            left_button,
            right_button,
        }
    }

    /// Set the icon glyph for the title row.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the message block.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a text-entry field.
    pub fn text_field(mut self, params: TextFieldParams) -> Self {
        self.text_field = Some(params);
        self
    }

    /// Attach the left toggle button.
    pub fn left_label(mut self, toggle: ToggleButton) -> Self {
        self.left_label = Some(toggle);
        self
    }

    /// Attach the right toggle button.
    pub fn right_label(mut self, toggle: ToggleButton) -> Self {
        self.right_label = Some(toggle);
        self
    }

    /// Whether the toggle row renders at all.
    pub fn has_toggle_row(&self) -> bool {
        self.left_label.is_some() || self.right_label.is_some()
    }

    /// Whether the confirm action is currently blocked.
    ///
    /// True iff a text field is configured and its trimmed value is empty.
    /// Recomputed from the shared value on every call; nothing is cached.
    pub fn submission_blocked(&self) -> bool {
        self.text_field
            .as_ref()
            .map(|field| field.value.is_blank())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertConfig")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("message", &self.message)
            .field("text_field", &self.text_field)
            .field("left_label", &self.left_label)
            .field("right_label", &self.right_label)
            .field("left_button", &self.left_button)
            .field("right_button", &self.right_button)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
