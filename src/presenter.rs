//! Alert presentation over a host view
//!
//! `AlertPresenter` owns the configuration and transient state for one
//! alert and composes it over the caller's content. Visibility is driven
//! entirely by the caller-owned `SharedFlag`: the presenter reads it every
//! render pass and writes `false` to it when an action button fires. It
//! never writes `true`.

use ratatui::{layout::Rect, Frame};

use crate::binding::SharedFlag;
use crate::config::AlertConfig;
use crate::input;
use crate::state::AlertState;
use crate::view::{render_alert, render_scrim};

/// Composes a host view with the alert overlay.
pub struct AlertPresenter {
    config: AlertConfig,
    state: AlertState,
    visibility: SharedFlag,
}

impl AlertPresenter {
    /// Create a presenter for the given configuration and visibility flag.
    ///
    /// The caller keeps its own clone of the flag and sets it to `true`
    /// to present the alert. A flag that already reads `true` counts as a
    /// show transition, so focus is placed immediately.
    pub fn new(config: AlertConfig, visibility: SharedFlag) -> Self {
        let mut state = AlertState::new();
        state.sync_visibility(visibility.get(), &config);
        Self {
            config,
            state,
            visibility,
        }
    }

    /// Whether the alert renders on the next draw.
    pub fn is_visible(&self) -> bool {
        self.visibility.get()
    }

    /// The configuration this presenter renders.
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Currently focused element, if the alert is visible.
    pub fn focus(&self) -> Option<crate::state::FocusTarget> {
        self.state.focus()
    }

    /// Render the host content, then the scrim and alert when visible.
    ///
    /// Z-order comes from call order: host first, scrim restyling it,
    /// dialog on top.
    pub fn render_over<F>(&mut self, frame: &mut Frame, area: Rect, host: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        host(frame, area);
        self.render(frame, area);
    }

    /// Render just the overlay portion (scrim + alert) when visible.
    ///
    /// For callers that draw their own content and hand the full area over
    /// afterwards.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = self.sync();
        if visible {
            render_scrim(frame, area);
            render_alert(frame, area, &self.config, &self.state);
        }
    }

    /// Route one key event to the alert.
    ///
    /// Returns true when the alert was visible and consumed the event;
    /// false means the host should handle it.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        if !self.sync() {
            return false;
        }
        input::handle_key(&mut self.config, &mut self.state, &self.visibility, key)
    }

    /// Sample the flag and run show/hide transitions. Returns visibility.
    fn sync(&mut self) -> bool {
        let visible = self.visibility.get();
        if self.state.sync_visibility(visible, &self.config) {
            tracing::debug!(visible, "Alert: visibility transition");
        }
        visible
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionButton;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::Cell;
    use std::rc::Rc;

    fn presenter(visibility: SharedFlag) -> (AlertPresenter, Rc<Cell<usize>>) {
        let presses = Rc::new(Cell::new(0));
        let presses_in = Rc::clone(&presses);
        let config = AlertConfig::new(
            "Quit?",
            ActionButton::new("Cancel", move || presses_in.set(presses_in.get() + 1)),
            ActionButton::new("Quit", || {}),
        );
        (AlertPresenter::new(config, visibility), presses)
    }

    #[test]
    fn test_hidden_alert_does_not_consume_keys() {
        let (mut presenter, presses) = presenter(SharedFlag::new(false));
        let consumed =
            presenter.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!consumed);
        assert_eq!(presses.get(), 0);
    }

    #[test]
    fn test_visible_alert_consumes_keys() {
        let flag = SharedFlag::new(true);
        let (mut presenter, presses) = presenter(flag.clone());
        let consumed =
            presenter.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(consumed);
        assert_eq!(presses.get(), 1);
        assert!(!flag.get());
    }

    #[test]
    fn test_external_dismissal_stops_key_consumption() {
        let flag = SharedFlag::new(true);
        let (mut presenter, presses) = presenter(flag.clone());
        assert!(presenter.is_visible());
        // Caller hides the alert without pressing anything
        flag.set(false);
        let consumed =
            presenter.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!consumed);
        assert_eq!(presses.get(), 0);
    }
}
