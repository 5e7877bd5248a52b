//! Keyboard handling for the visible alert
//!
//! Maps key events onto the alert's interactive elements:
//!
//! - `Tab` / `Down` move focus forward, `BackTab` / `Up` backward;
//!   `Left` / `Right` do the same while focus is not on the text field
//! - `Enter` presses the focused element; from the text field it presses
//!   the confirm action
//! - `Esc` presses the cancel action
//! - printable characters and `Backspace` edit the focused text field
//!
//! Action-button presses invoke the configured callback and then write
//! `false` to the visibility flag. A blocked confirm press does neither.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::binding::SharedFlag;
use crate::config::AlertConfig;
use crate::state::{AlertState, FocusTarget};

/// Handle one key event for a visible alert.
///
/// Always returns true: while the alert is visible it owns the keyboard,
/// and unrecognized keys are swallowed rather than reaching the host.
pub fn handle_key(
    config: &mut AlertConfig,
    state: &mut AlertState,
    visibility: &SharedFlag,
    key: KeyEvent,
) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }

    let in_text_field = state.is_focused(FocusTarget::TextField);

    match key.code {
        KeyCode::Esc => press_cancel(config, visibility),
        KeyCode::Tab | KeyCode::Down => state.focus_next(config),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(config),
        KeyCode::Right if !in_text_field => state.focus_next(config),
        KeyCode::Left if !in_text_field => state.focus_prev(config),
        KeyCode::Enter => activate_focused(config, state, visibility),
        KeyCode::Backspace if in_text_field => {
            if let Some(field) = &config.text_field {
                field.value.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if in_text_field {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    if let Some(field) = &config.text_field {
                        field.value.push_char(c);
                    }
                }
            } else if c == ' ' {
                activate_focused(config, state, visibility);
            }
        }
        _ => {}
    }

    true
}

/// Press whatever currently holds focus.
fn activate_focused(config: &mut AlertConfig, state: &AlertState, visibility: &SharedFlag) {
    match state.focus() {
        Some(FocusTarget::TextField) | Some(FocusTarget::ConfirmButton) => {
            press_confirm(config, visibility);
        }
        Some(FocusTarget::CancelButton) => press_cancel(config, visibility),
        Some(FocusTarget::LeftToggle) => {
            if let Some(toggle) = config.left_label.as_mut() {
                tracing::debug!(toggle = %toggle.text, "Alert: toggle activated");
                toggle.activate();
            }
        }
        Some(FocusTarget::RightToggle) => {
            if let Some(toggle) = config.right_label.as_mut() {
                tracing::debug!(toggle = %toggle.text, "Alert: toggle activated");
                toggle.activate();
            }
        }
        None => {}
    }
}

/// Cancel always fires: callback first, then dismiss.
fn press_cancel(config: &mut AlertConfig, visibility: &SharedFlag) {
    tracing::debug!("Alert: cancel action pressed");
    config.left_button.press();
    visibility.set(false);
}

/// Confirm fires only while submission is not blocked.
fn press_confirm(config: &mut AlertConfig, visibility: &SharedFlag) {
    if config.submission_blocked() {
        tracing::debug!("Alert: confirm press ignored, submission blocked");
        return;
    }
    tracing::debug!("Alert: confirm action pressed");
    config.right_button.press();
    visibility.set(false);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::SharedText;
    use crate::config::{ActionButton, TextFieldParams, ToggleButton};
    use std::cell::Cell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    struct Fixture {
        config: AlertConfig,
        state: AlertState,
        visibility: SharedFlag,
        cancel_count: Rc<Cell<usize>>,
        confirm_count: Rc<Cell<usize>>,
    }

    fn fixture(text_field: Option<TextFieldParams>) -> Fixture {
        let cancel_count = Rc::new(Cell::new(0));
        let confirm_count = Rc::new(Cell::new(0));
        let cancel_in = Rc::clone(&cancel_count);
        let confirm_in = Rc::clone(&confirm_count);

        let mut config = AlertConfig::new(
            "Title",
            ActionButton::new("Cancel", move || cancel_in.set(cancel_in.get() + 1)),
            ActionButton::new("Delete", move || confirm_in.set(confirm_in.get() + 1)),
        );
        if let Some(field) = text_field {
            config = config.text_field(field);
        }

        let visibility = SharedFlag::new(true);
        let mut state = AlertState::new();
        state.sync_visibility(true, &config);

        Fixture {
            config,
            state,
            visibility,
            cancel_count,
            confirm_count,
        }
    }

    #[test]
    fn test_esc_presses_cancel_and_dismisses() {
        let mut fx = fixture(None);
        handle_key(&mut fx.config, &mut fx.state, &fx.visibility, key(KeyCode::Esc));
        assert_eq!(fx.cancel_count.get(), 1);
        assert!(!fx.visibility.get());
    }

    #[test]
    fn test_enter_on_confirm_fires_and_dismisses() {
        let mut fx = fixture(None);
        // Initial focus is the confirm button when no text field exists
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Enter),
        );
        assert_eq!(fx.confirm_count.get(), 1);
        assert_eq!(fx.cancel_count.get(), 0);
        assert!(!fx.visibility.get());
    }

    #[test]
    fn test_blocked_confirm_press_is_inert() {
        let mut fx = fixture(Some(TextFieldParams::new("Name", SharedText::new(""))));
        // Enter from the text field presses confirm, which is blocked
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Enter),
        );
        assert_eq!(fx.confirm_count.get(), 0);
        assert!(fx.visibility.get());
    }

    #[test]
    fn test_confirm_unblocks_once_text_is_nonblank() {
        let value = SharedText::new("");
        let mut fx = fixture(Some(TextFieldParams::new("Name", value.clone())));
        for c in "Alice".chars() {
            handle_key(
                &mut fx.config,
                &mut fx.state,
                &fx.visibility,
                key(KeyCode::Char(c)),
            );
        }
        assert_eq!(value.get(), "Alice");
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Enter),
        );
        assert_eq!(fx.confirm_count.get(), 1);
        assert!(!fx.visibility.get());
    }

    #[test]
    fn test_backspace_edits_text_field() {
        let value = SharedText::new("ab");
        let mut fx = fixture(Some(TextFieldParams::new("Name", value.clone())));
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Backspace),
        );
        assert_eq!(value.get(), "a");
    }

    #[test]
    fn test_control_chars_do_not_enter_text_field() {
        let value = SharedText::new("");
        let mut fx = fixture(Some(TextFieldParams::new("Name", value.clone())));
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(value.get(), "");
    }

    #[test]
    fn test_tab_cycles_then_space_presses_cancel() {
        let mut fx = fixture(None);
        // Confirm -> wraps to cancel
        handle_key(&mut fx.config, &mut fx.state, &fx.visibility, key(KeyCode::Tab));
        assert!(fx.state.is_focused(FocusTarget::CancelButton));
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Char(' ')),
        );
        assert_eq!(fx.cancel_count.get(), 1);
        assert!(!fx.visibility.get());
    }

    #[test]
    fn test_toggle_activation_keeps_alert_visible() {
        let active = SharedFlag::new(false);
        let active_in = active.clone();
        let mut fx = fixture(None);
        fx.config = fx.config.left_label(ToggleButton::new(
            "Add Favorite",
            "\u{2665}",
            active.clone(),
            move || active_in.toggle(),
        ));
        // Re-sync focus order now that the toggle exists
        fx.state = AlertState::new();
        fx.state.sync_visibility(true, &fx.config);
        // Confirm wraps forward to the left toggle
        handle_key(&mut fx.config, &mut fx.state, &fx.visibility, key(KeyCode::Tab));
        assert!(fx.state.is_focused(FocusTarget::LeftToggle));
        handle_key(
            &mut fx.config,
            &mut fx.state,
            &fx.visibility,
            key(KeyCode::Enter),
        );
        assert!(active.get());
        assert!(fx.visibility.get());
        assert_eq!(fx.cancel_count.get(), 0);
        assert_eq!(fx.confirm_count.get(), 0);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut fx = fixture(None);
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key(&mut fx.config, &mut fx.state, &fx.visibility, release);
        assert_eq!(fx.cancel_count.get(), 0);
        assert!(fx.visibility.get());
    }
}
