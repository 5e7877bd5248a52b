//! tui-alert - a customizable modal alert overlay for ratatui
//!
//! A styled, centered alert dialog rendered over a dimmed scrim, with a
//! title, optional icon, optional message, optional labeled text field,
//! optional pair of toggle-style icon buttons, and two action buttons
//! (cancel/confirm). Presentation is driven by a caller-owned boolean
//! flag: set it to `true` to show the alert; either action button press
//! sets it back to `false`.
//!
//! # Example
//!
//! ```no_run
//! use tui_alert::{ActionButton, AlertConfig, AlertPresenter, SharedFlag};
//!
//! let show_alert = SharedFlag::new(false);
//! let config = AlertConfig::new(
//!     "Delete Item",
//!     ActionButton::new("Cancel", || {}),
//!     ActionButton::new("Delete", || { /* delete it */ }),
//! )
//! .message("This cannot be undone");
//!
//! let mut alert = AlertPresenter::new(config, show_alert.clone());
//! show_alert.set(true);
//!
//! // In the draw loop:
//! // terminal.draw(|frame| {
//! //     alert.render_over(frame, frame.area(), |frame, area| {
//! //         /* draw the host view */
//! //     });
//! // })?;
//! //
//! // In the event loop:
//! // if !alert.handle_key(key) { /* host handles the key */ }
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod presenter;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod view;

pub use binding::{SharedFlag, SharedText};
pub use config::{ActionButton, AlertConfig, TextFieldParams, ToggleButton};
pub use error::AlertError;
pub use presenter::AlertPresenter;
pub use state::{AlertState, FocusTarget};
pub use view::{alert_content_height, alert_dialog_rect, render_alert, render_scrim};
