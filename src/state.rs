//! Transient alert state
//!
//! The alert's only internal state is which interactive element currently
//! holds focus. Everything else (visibility, toggle activation, text
//! content) is caller-owned and reached through shared bindings.

use crate::config::AlertConfig;

/// The interactive elements focus can land on, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The text-entry field, when configured
    TextField,
    /// The left toggle button, when configured
    LeftToggle,
    /// The right toggle button, when configured
    RightToggle,
    /// The cancel-style left action button
    CancelButton,
    /// The confirm-style right action button
    ConfirmButton,
}

/// Transient per-presentation state: focus tracking plus the previous
/// visibility sample used for edge detection.
#[derive(Debug, Default)]
pub struct AlertState {
    focus: Option<FocusTarget>,
    was_visible: bool,
}

impl AlertState {
    /// Create state for a hidden alert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused element, if the alert is visible.
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Whether the given element holds focus.
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Sample the visibility flag and handle the show/hide transitions.
    ///
    /// On hidden->visible, focus lands on the text field when one is
    /// configured, otherwise on the confirm button. On visible->hidden the
    /// state resets, releasing focus.
    ///
    /// Returns true when a transition happened in this sample.
    pub fn sync_visibility(&mut self, visible: bool, config: &AlertConfig) -> bool {
        let transitioned = visible != self.was_visible;
        if transitioned {
            if visible {
                self.focus = Some(if config.text_field.is_some() {
                    FocusTarget::TextField
                } else {
                    FocusTarget::ConfirmButton
                });
            } else {
                self.focus = None;
            }
            self.was_visible = visible;
        }
        transitioned
    }

    /// Move focus to the next present element, wrapping.
    pub fn focus_next(&mut self, config: &AlertConfig) {
        self.cycle(config, 1);
    }

    /// Move focus to the previous present element, wrapping.
    pub fn focus_prev(&mut self, config: &AlertConfig) {
        self.cycle(config, -1);
    }

    fn cycle(&mut self, config: &AlertConfig, step: isize) {
        let order = focus_order(config);
        let Some(current) = self.focus else {
            return;
        };
        // Focus always points at a present element, but fall back to the
        // confirm button if the config changed underneath us.
        let index = order
            .iter()
            .position(|t| *t == current)
            .unwrap_or(order.len() - 1);
        let len = order.len() as isize;
        let next = (index as isize + step).rem_euclid(len) as usize;
        self.focus = Some(order[next]);
    }
}

/// Traversal order over the elements present in `config`.
///
/// The two action buttons are always present, so the order is never empty.
pub fn focus_order(config: &AlertConfig) -> Vec<FocusTarget> {
    let mut order = Vec::with_capacity(5);
    if config.text_field.is_some() {
        order.push(FocusTarget::TextField);
    }
    if config.left_label.is_some() {
        order.push(FocusTarget::LeftToggle);
    }
    if config.right_label.is_some() {
        order.push(FocusTarget::RightToggle);
    }
    order.push(FocusTarget::CancelButton);
    order.push(FocusTarget::ConfirmButton);
    order
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{SharedFlag, SharedText};
    use crate::config::{ActionButton, TextFieldParams, ToggleButton};

    fn plain_config() -> AlertConfig {
        AlertConfig::new(
            "Title",
            ActionButton::new("Cancel", || {}),
            ActionButton::new("OK", || {}),
        )
    }

    fn full_config() -> AlertConfig {
        plain_config()
            .text_field(TextFieldParams::new("Name", SharedText::new("")))
            .left_label(ToggleButton::new(
                "Add Favorite",
                "\u{2665}",
                SharedFlag::new(false),
                || {},
            ))
            .right_label(ToggleButton::new(
                "Pin",
                "\u{1F4CC}",
                SharedFlag::new(false),
                || {},
            ))
    }

    #[test]
    fn test_show_transition_focuses_text_field_when_present() {
        let config = full_config();
        let mut state = AlertState::new();
        assert!(state.sync_visibility(true, &config));
        assert_eq!(state.focus(), Some(FocusTarget::TextField));
    }

    #[test]
    fn test_show_transition_focuses_confirm_without_text_field() {
        let config = plain_config();
        let mut state = AlertState::new();
        state.sync_visibility(true, &config);
        assert_eq!(state.focus(), Some(FocusTarget::ConfirmButton));
    }

    #[test]
    fn test_hide_transition_releases_focus() {
        let config = full_config();
        let mut state = AlertState::new();
        state.sync_visibility(true, &config);
        assert!(state.sync_visibility(false, &config));
        assert!(state.focus().is_none());
    }

    #[test]
    fn test_sync_without_transition_reports_false() {
        let config = plain_config();
        let mut state = AlertState::new();
        assert!(!state.sync_visibility(false, &config));
        state.sync_visibility(true, &config);
        assert!(!state.sync_visibility(true, &config));
    }

    #[test]
    fn test_focus_order_skips_absent_sections() {
        let order = focus_order(&plain_config());
        assert_eq!(
            order,
            vec![FocusTarget::CancelButton, FocusTarget::ConfirmButton]
        );

        let order = focus_order(&full_config());
        assert_eq!(
            order,
            vec![
                FocusTarget::TextField,
                FocusTarget::LeftToggle,
                FocusTarget::RightToggle,
                FocusTarget::CancelButton,
                FocusTarget::ConfirmButton,
            ]
        );
    }

    #[test]
    fn test_focus_next_wraps() {
        let config = plain_config();
        let mut state = AlertState::new();
        state.sync_visibility(true, &config);
        // Starts on confirm (no text field); next wraps to cancel.
        state.focus_next(&config);
        assert_eq!(state.focus(), Some(FocusTarget::CancelButton));
        state.focus_next(&config);
        assert_eq!(state.focus(), Some(FocusTarget::ConfirmButton));
    }

    #[test]
    fn test_focus_prev_wraps() {
        let config = full_config();
        let mut state = AlertState::new();
        state.sync_visibility(true, &config);
        assert_eq!(state.focus(), Some(FocusTarget::TextField));
        state.focus_prev(&config);
        assert_eq!(state.focus(), Some(FocusTarget::ConfirmButton));
    }
}
