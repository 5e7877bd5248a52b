//! Alert rendering
//!
//! Pure rendering from an `AlertConfig` + `AlertState` to widgets on a
//! frame. Sections render in a fixed order - title row, message, text
//! field, toggle row, action row - and an absent optional field simply
//! skips its section. No state is mutated here.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::config::{AlertConfig, TextFieldParams, ToggleButton};
use crate::layout::{centered_rect, LayoutContext};
use crate::state::{AlertState, FocusTarget};
use crate::theme::{
    COLOR_ALERT_BG, COLOR_BORDER, COLOR_BUTTON_CANCEL, COLOR_BUTTON_CONFIRM,
    COLOR_BUTTON_DISABLED, COLOR_DIM, COLOR_FIELD_LABEL, COLOR_SCRIM, COLOR_TEXT,
    COLOR_TEXTFIELD_BG, COLOR_TOGGLE_ACTIVE,
};

/// Minimum dialog width in columns
const MIN_DIALOG_WIDTH: u16 = 32;

/// Maximum dialog width in columns
const MAX_DIALOG_WIDTH: u16 = 46;

/// Horizontal padding between the dialog border and section content
const SECTION_PAD: u16 = 2;

// ============================================================================
// Sizing
// ============================================================================

/// Calculate the dialog width for the current terminal size.
fn alert_width(ctx: &LayoutContext, area_width: u16) -> u16 {
    if ctx.is_extra_small() {
        // Extra small: take most of the screen width, leave 2 cols margin
        area_width.saturating_sub(4).min(MAX_DIALOG_WIDTH)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, MIN_DIALOG_WIDTH, MAX_DIALOG_WIDTH)
    } else {
        ctx.bounded_width(50, MIN_DIALOG_WIDTH, MAX_DIALOG_WIDTH)
    }
}

/// Number of rows `text` occupies when word-wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut rows: u16 = 0;
    for line in text.lines() {
        let mut used = 0usize;
        let mut row_open = false;
        for word in line.split_whitespace() {
            let word_width = word.width();
            if !row_open {
                rows += 1;
                row_open = true;
                used = word_width.min(width);
            } else if used + 1 + word_width <= width {
                used += 1 + word_width;
            } else {
                rows += 1;
                used = word_width.min(width);
            }
            // Oversized words spill onto extra rows
            if word_width > width {
                rows += ((word_width - 1) / width) as u16;
                used = word_width % width;
                if used == 0 {
                    used = width;
                }
            }
        }
        if !row_open {
            rows += 1; // Blank line still takes a row
        }
    }
    rows.max(1)
}

/// Content height (rows inside the border) for the given configuration.
///
/// Sections stack in fixed order with a blank spacer row after each one
/// except the action row:
/// - title row (1) + spacer
/// - message block (wrapped) + spacer, if configured
/// - text field (label + 3-row box) + spacer, if configured
/// - toggle row (1) + spacer, if either toggle is configured
/// - action row (1)
pub fn alert_content_height(config: &AlertConfig, content_width: u16) -> u16 {
    let text_width = content_width.saturating_sub(SECTION_PAD * 2);
    let mut height = 2; // Title row + spacer
    if let Some(message) = &config.message {
        height += wrapped_height(message, text_width) + 1;
    }
    if config.text_field.is_some() {
        height += 5; // Label (1) + bordered box (3) + spacer
    }
    if config.has_toggle_row() {
        height += 2;
    }
    height + 1 // Action row
}

/// Compute the centered dialog rectangle for `config` within `area`.
pub fn alert_dialog_rect(config: &AlertConfig, area: Rect) -> Rect {
    let ctx = LayoutContext::from_area(area);
    let width = alert_width(&ctx, area.width);
    let height = alert_content_height(config, width.saturating_sub(2)) + 2;
    centered_rect(area, width, height)
}

// ============================================================================
// Scrim
// ============================================================================

/// Dim the host content behind the alert.
///
/// Ratatui renders in call order, so the scrim restyles everything drawn
/// so far and the dialog is drawn on top of it afterwards.
pub fn render_scrim(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().fg(COLOR_SCRIM).add_modifier(Modifier::DIM)),
        area,
    );
}

// ============================================================================
// Alert
// ============================================================================

/// Render the alert dialog centered in `area`.
///
/// Returns the dialog rectangle that was drawn.
pub fn render_alert(
    frame: &mut Frame,
    area: Rect,
    config: &AlertConfig,
    state: &AlertState,
) -> Rect {
    let dialog_area = alert_dialog_rect(config, area);

    // Clear the host content behind the dialog, then draw the card
    frame.render_widget(Clear, dialog_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_ALERT_BG));
    frame.render_widget(block, dialog_area);

    let inner = Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    };

    let mut y_offset = 0;
    y_offset += render_title_row(frame, inner, config);
    y_offset += 1; // Spacer

    if let Some(message) = &config.message {
        y_offset += render_message(frame, inner, y_offset, message);
        y_offset += 1;
    }

    if let Some(field) = &config.text_field {
        y_offset += render_text_field(
            frame,
            inner,
            y_offset,
            field,
            state.is_focused(FocusTarget::TextField),
        );
        y_offset += 1;
    }

    if config.has_toggle_row() {
        y_offset += render_toggle_row(frame, inner, y_offset, config, state);
        y_offset += 1;
    }

    render_action_row(frame, inner, y_offset, config, state);

    dialog_area
}

/// Rect for one section row band, clipped to the inner area.
fn section_rect(inner: Rect, y_offset: u16, height: u16, padded: bool) -> Rect {
    let pad = if padded { SECTION_PAD } else { 0 };
    let y = inner.y + y_offset.min(inner.height);
    let max_height = inner.height.saturating_sub(y_offset);
    Rect {
        x: inner.x + pad,
        y,
        width: inner.width.saturating_sub(pad * 2),
        height: height.min(max_height),
    }
}

/// Title left, optional icon glyph right-aligned. Always one row.
fn render_title_row(frame: &mut Frame, inner: Rect, config: &AlertConfig) -> u16 {
    let row = section_rect(inner, 0, 1, true);
    if row.height == 0 {
        return 1;
    }

    // The icon gets a trailing sub-rect so a wide title truncates at the
    // separating space instead of being overdrawn
    let icon_width = config
        .icon
        .as_deref()
        .map(|icon| (icon.width() as u16).min(row.width))
        .unwrap_or(0);
    let title_rect = Rect {
        width: row.width.saturating_sub(if icon_width > 0 {
            icon_width + 1
        } else {
            0
        }),
        ..row
    };

    let title = Paragraph::new(Line::from(Span::styled(
        config.title.as_str(),
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, title_rect);

    if let Some(icon) = &config.icon {
        let icon_rect = Rect {
            x: row.x + row.width.saturating_sub(icon_width),
            width: icon_width,
            ..row
        };
        let icon_widget = Paragraph::new(Line::from(Span::styled(
            icon.as_str(),
            Style::default().fg(COLOR_TEXT),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(icon_widget, icon_rect);
    }
    1
}

/// Word-wrapped, centered message block.
fn render_message(frame: &mut Frame, inner: Rect, y_offset: u16, message: &str) -> u16 {
    let height = wrapped_height(message, inner.width.saturating_sub(SECTION_PAD * 2));
    let rect = section_rect(inner, y_offset, height, true);
    if rect.height == 0 {
        return height;
    }

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(COLOR_TEXT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rect);
    height
}

/// Field label plus bordered input box. Always four rows.
fn render_text_field(
    frame: &mut Frame,
    inner: Rect,
    y_offset: u16,
    field: &TextFieldParams,
    focused: bool,
) -> u16 {
    let label_rect = section_rect(inner, y_offset, 1, true);
    if label_rect.height > 0 {
        let label = Paragraph::new(Line::from(Span::styled(
            field.label.as_str(),
            Style::default()
                .fg(COLOR_FIELD_LABEL)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(label, label_rect);
    }

    let box_rect = section_rect(inner, y_offset + 1, 3, true);
    if box_rect.height < 3 {
        return 4;
    }

    let border_color = if focused { COLOR_TEXT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_TEXTFIELD_BG));

    let value = field.value.get();
    let (mut content, text_style) = if value.is_empty() {
        (
            field.placeholder.clone(),
            Style::default().fg(COLOR_DIM),
        )
    } else {
        (value, Style::default().fg(COLOR_TEXT))
    };
    if focused {
        content.push('\u{2588}'); // Block cursor
    }

    // Keep the tail visible when the value outgrows the box
    let visible = box_rect.width.saturating_sub(2) as usize;
    let overflow = content.width().saturating_sub(visible);
    if overflow > 0 {
        let skip = content
            .char_indices()
            .scan(0usize, |acc, (i, c)| {
                let start = *acc;
                *acc += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                Some((i, start))
            })
            .find(|(_, start)| *start >= overflow)
            .map(|(i, _)| i)
            .unwrap_or(0);
        content = content[skip..].to_string();
    }

    let input = Paragraph::new(Line::from(Span::styled(content, text_style))).block(block);
    frame.render_widget(input, box_rect);
    4
}

fn toggle_spans<'a>(toggle: &'a ToggleButton, focused: bool) -> Span<'a> {
    let color = if toggle.active.get() {
        COLOR_TOGGLE_ACTIVE
    } else {
        COLOR_DIM
    };
    let mut style = Style::default().fg(color);
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{} {}", toggle.icon, toggle.text), style)
}

/// Row of up to two icon+label toggle buttons. One row.
fn render_toggle_row(
    frame: &mut Frame,
    inner: Rect,
    y_offset: u16,
    config: &AlertConfig,
    state: &AlertState,
) -> u16 {
    let rect = section_rect(inner, y_offset, 1, true);
    if rect.height == 0 {
        return 1;
    }

    let mut spans = Vec::new();
    if let Some(left) = &config.left_label {
        spans.push(toggle_spans(left, state.is_focused(FocusTarget::LeftToggle)));
    }
    if let Some(right) = &config.right_label {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(toggle_spans(
            right,
            state.is_focused(FocusTarget::RightToggle),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    1
}

/// Cancel/confirm halves across the full inner width. One row.
fn render_action_row(
    frame: &mut Frame,
    inner: Rect,
    y_offset: u16,
    config: &AlertConfig,
    state: &AlertState,
) {
    let row = section_rect(inner, y_offset, 1, false);
    if row.height == 0 {
        return;
    }

    let left_width = row.width / 2;
    let left_rect = Rect {
        width: left_width,
        ..row
    };
    let right_rect = Rect {
        x: row.x + left_width,
        width: row.width - left_width,
        ..row
    };

    let mut cancel_style = Style::default().fg(COLOR_TEXT).bg(COLOR_BUTTON_CANCEL);
    if state.is_focused(FocusTarget::CancelButton) {
        cancel_style = cancel_style.add_modifier(Modifier::REVERSED);
    }
    let cancel = Paragraph::new(Line::from(Span::styled(
        config.left_button.text.as_str(),
        cancel_style,
    )))
    .style(Style::default().bg(COLOR_BUTTON_CANCEL))
    .alignment(Alignment::Center);
    frame.render_widget(cancel, left_rect);

    // Disabled tone while submission is blocked; the press itself is
    // rejected in the input layer
    let confirm_bg = if config.submission_blocked() {
        COLOR_BUTTON_DISABLED
    } else {
        COLOR_BUTTON_CONFIRM
    };
    let mut confirm_style = Style::default()
        .fg(COLOR_TEXT)
        .bg(confirm_bg)
        .add_modifier(Modifier::BOLD);
    if state.is_focused(FocusTarget::ConfirmButton) {
        confirm_style = confirm_style.add_modifier(Modifier::REVERSED);
    }
    let confirm = Paragraph::new(Line::from(Span::styled(
        config.right_button.text.as_str(),
        confirm_style,
    )))
    .style(Style::default().bg(confirm_bg))
    .alignment(Alignment::Center);
    frame.render_widget(confirm, right_rect);
}

// ============================================================================
// Tests
// ============================================================================
