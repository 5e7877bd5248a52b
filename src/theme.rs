//! Color theme constants for the alert overlay
//!
//! Defines the dark palette used by every alert section. The names mirror
//! the styling collaborators of the component (alert surface, border,
//! cancel/confirm buttons, text field) so callers can reason about which
//! constant affects which section.

use ratatui::style::Color;

// ============================================================================
// Alert Surface
// ============================================================================

/// Background color of the alert card
pub const COLOR_ALERT_BG: Color = Color::Rgb(28, 28, 32);

/// Border color around the alert card
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and primary text - white
pub const COLOR_TEXT: Color = Color::White;

/// Dim text for secondary content (message, placeholders, inactive toggles)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Scrim tint applied to the host content while the alert is visible
pub const COLOR_SCRIM: Color = Color::DarkGray;

// ============================================================================
// Text Field
// ============================================================================

/// Background for the text-entry box
pub const COLOR_TEXTFIELD_BG: Color = Color::Rgb(20, 20, 30);

/// Field label above the text-entry box
pub const COLOR_FIELD_LABEL: Color = Color::Gray;

// ============================================================================
// Buttons
// ============================================================================

/// Cancel (left) action button background
pub const COLOR_BUTTON_CANCEL: Color = Color::Rgb(58, 58, 64);

/// Confirm (right) action button background - destructive red
pub const COLOR_BUTTON_CONFIRM: Color = Color::Rgb(200, 48, 48);

/// Confirm button background while submission is blocked
pub const COLOR_BUTTON_DISABLED: Color = Color::Rgb(96, 96, 100);

/// Toggle button in its active state - red, matching the confirm accent
pub const COLOR_TOGGLE_ACTIVE: Color = Color::Rgb(200, 48, 48);
