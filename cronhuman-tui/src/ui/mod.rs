//! UI rendering
//!
//! Pure rendering functions: state and preview in, frame out. No logic
//! beyond layout lives here; the reducer decides everything.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Focus};
use crate::preview::Preview;

/// Rows of history visible at once; the window follows the cursor.
const HISTORY_ROWS: usize = 5;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, preview: &Preview) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                      // header
            Constraint::Length(3),                      // expression input
            Constraint::Length(3),                      // options
            Constraint::Min(6),                         // preview
            Constraint::Length(HISTORY_ROWS as u16 + 3), // history
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_input(frame, chunks[1], state);
    render_options(frame, chunks[2], state);
    render_preview(frame, chunks[3], state, preview);
    render_history(frame, chunks[4], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Pass colors through only when enabled.
fn tint(state: &AppState, color: Color) -> Color {
    if state.config.colors_enabled {
        color
    } else {
        Color::Reset
    }
}

fn focus_border(state: &AppState, focus: Focus) -> Style {
    if state.focus == focus {
        Style::default().fg(tint(state, Color::Green))
    } else {
        Style::default().fg(tint(state, Color::DarkGray))
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            "Cron Human TUI",
            Style::default()
                .fg(tint(state, Color::Magenta))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            "Tab: focus | F1: help | Ctrl+C: quit",
            Style::default().fg(tint(state, Color::Gray)),
        ),
    ];

    if let Some(notification) = &state.notification {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            &notification.message,
            Style::default()
                .fg(tint(state, Color::Yellow))
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Cron Expression ")
        .borders(Borders::ALL)
        .border_style(focus_border(state, Focus::Input));

    let line = if state.expression.is_empty() {
        let mut spans = vec![Span::styled(
            "* * * * *",
            Style::default().fg(tint(state, Color::DarkGray)),
        )];
        if state.focus == Focus::Input {
            spans.insert(0, cursor_span(state));
        }
        Line::from(spans)
    } else {
        let mut spans = vec![Span::raw(state.expression.as_str())];
        if state.focus == Focus::Input {
            spans.push(cursor_span(state));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn cursor_span(state: &AppState) -> Span<'static> {
    Span::styled("█", Style::default().fg(tint(state, Color::Green)))
}

fn render_options(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Options (Space to toggle) ")
        .borders(Borders::ALL)
        .border_style(focus_border(state, Focus::Options));

    let checkbox = if state.allow_seconds { "[x]" } else { "[ ]" };
    let timezone = state.timezone.as_deref().unwrap_or("Local");

    let line = Line::from(vec![
        Span::styled(
            format!("{checkbox} Allow Seconds"),
            Style::default().fg(tint(
                state,
                if state.focus == Focus::Options {
                    Color::Cyan
                } else {
                    Color::White
                },
            )),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Timezone: {timezone}"),
            Style::default().fg(tint(state, Color::Gray)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState, preview: &Preview) {
    let border = if preview.is_error {
        Style::default().fg(tint(state, Color::Red))
    } else {
        Style::default().fg(tint(state, Color::Blue))
    };

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(border);

    let mut lines = vec![
        Line::from(Span::styled(
            "Human Readable:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            preview.text.clone(),
            Style::default().fg(tint(
                state,
                if preview.is_error {
                    Color::Red
                } else {
                    Color::Green
                },
            )),
        )),
    ];

    if !preview.is_error && !preview.next_runs.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Next runs:",
            Style::default().fg(tint(state, Color::Gray)),
        )));
        for run in &preview.next_runs {
            lines.push(Line::from(Span::styled(
                format!("  - {run}"),
                Style::default().fg(tint(state, Color::Gray)),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" History (Up/Down to navigate, Enter to load, c to copy) ")
        .borders(Borders::ALL)
        .border_style(focus_border(state, Focus::History));

    if state.history.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No history yet. Press Enter to save the current expression.",
            Style::default().fg(tint(state, Color::DarkGray)),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let cursor = state.history.cursor();
    let start = cursor.saturating_sub(HISTORY_ROWS - 1);
    let entries = state.history.entries();

    let mut lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(HISTORY_ROWS)
        .map(|(idx, entry)| {
            let selected = idx == cursor;
            let marker = if selected { "> " } else { "  " };
            Line::from(Span::styled(
                format!("{marker}{}", entry.expression),
                Style::default().fg(tint(
                    state,
                    if selected { Color::Cyan } else { Color::White },
                )),
            ))
        })
        .collect();

    let shown_through = (start + HISTORY_ROWS).min(entries.len());
    if entries.len() > shown_through {
        lines.push(Line::from(Span::styled(
            format!("... {} more", entries.len() - shown_through),
            Style::default().fg(tint(state, Color::DarkGray)),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Help & Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Tab        Cycle focus (Input -> Options -> History)"),
        Line::from("  Enter      Save to history / load selected entry"),
        Line::from("  Up/Down    Navigate history"),
        Line::from("  c          Copy selected history entry"),
        Line::from("  Ctrl+V     Paste from clipboard"),
        Line::from("  Ctrl+R     Reset input"),
        Line::from("  Ctrl+C     Quit (q also works outside the input)"),
        Line::from(""),
        Line::from(Span::styled(
            "Examples:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  * * * * *       Every minute"),
        Line::from("  0 12 * * 1-5    At 12:00 on weekdays"),
        Line::from("  @daily          Once a day at midnight"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or F1 to close",
            Style::default().fg(tint(state, Color::Gray)),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(tint(state, Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
