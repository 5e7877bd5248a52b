//! Interactive demo for the alert overlay.
//!
//! Run with `cargo run --bin tui-alert-demo`. Press `d` for a plain
//! confirm alert, `r` for the full alert (text field + toggles), `q` to
//! quit.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tracing_subscriber::EnvFilter;

use tui_alert::terminal::{setup_panic_hook, TerminalManager};
use tui_alert::{
    ActionButton, AlertConfig, AlertPresenter, SharedFlag, SharedText, TextFieldParams,
    ToggleButton,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;

    let status = Rc::new(RefCell::new(String::from("No action yet")));
    let favorite = SharedFlag::new(false);
    let pinned = SharedFlag::new(false);

    // Plain confirm alert
    let show_delete = SharedFlag::new(false);
    let mut delete_alert = {
        let status_cancel = Rc::clone(&status);
        let status_confirm = Rc::clone(&status);
        AlertPresenter::new(
            AlertConfig::new(
                "Delete Item",
                ActionButton::new("Cancel", move || {
                    *status_cancel.borrow_mut() = "Delete cancelled".into();
                }),
                ActionButton::new("Delete", move || {
                    *status_confirm.borrow_mut() = "Item deleted".into();
                }),
            )
            .icon("\u{26A0}")
            .message("This cannot be undone"),
            show_delete.clone(),
        )
    };

    // Full alert: text field + both toggles
    let name = SharedText::new("");
    let show_rename = SharedFlag::new(false);
    let mut rename_alert = {
        let status_cancel = Rc::clone(&status);
        let status_confirm = Rc::clone(&status);
        let name_out = name.clone();
        let favorite_cb = favorite.clone();
        let pinned_cb = pinned.clone();
        AlertPresenter::new(
            AlertConfig::new(
                "Rename Item",
                ActionButton::new("Cancel", move || {
                    *status_cancel.borrow_mut() = "Rename cancelled".into();
                }),
                ActionButton::new("Save", move || {
                    *status_confirm.borrow_mut() = format!("Renamed to '{}'", name_out.get());
                }),
            )
            .icon("\u{270E}")
            .message("Pick a new name for the item")
            .text_field(TextFieldParams::new("Name", name.clone()))
            .left_label(ToggleButton::new(
                "Add Favorite",
                "\u{2665}",
                favorite.clone(),
                move || favorite_cb.toggle(),
            ))
            .right_label(ToggleButton::new("Pin", "\u{1F4CC}", pinned.clone(), move || {
                pinned_cb.toggle()
            })),
            show_rename.clone(),
        )
    };

    loop {
        manager.terminal().draw(|frame| {
            let area = frame.area();
            render_host(frame, area, &status.borrow(), &favorite, &pinned);
            delete_alert.render(frame, area);
            rename_alert.render(frame, area);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // A visible alert owns the keyboard
        if delete_alert.handle_key(key) || rename_alert.handle_key(key) {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Char('d') => show_delete.set(true),
            KeyCode::Char('r') => {
                name.set("");
                show_rename.set(true);
            }
            _ => {}
        }
    }

    Ok(())
}

fn render_host(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    favorite: &SharedFlag,
    pinned: &SharedFlag,
) {
    let block = Block::default()
        .title(" tui-alert demo ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  d - delete confirmation    r - rename with text field    q - quit",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Last action: "),
            Span::styled(status, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("  Favorite: "),
            Span::raw(if favorite.get() { "yes" } else { "no" }),
            Span::raw("    Pinned: "),
            Span::raw(if pinned.get() { "yes" } else { "no" }),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
