//! Layout components (stepper header, status bar)

use crate::app::App;
use crate::state::{SubmissionStatus, WizardState, STEPS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split into stepper header and content, reserving the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Stepper
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Full-height layout without the stepper (confirmation screen)
pub fn create_layout_no_stepper(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the step header: one cell per step plus a progress counter
pub fn draw_stepper(frame: &mut Frame, area: Rect, app: &App) {
    let current = match app.wizard.state() {
        WizardState::Step(n) => n,
        WizardState::Submitted => STEPS.len(),
    };

    let mut spans = vec![Span::raw(" ")];
    for (idx, step) in STEPS.iter().enumerate() {
        let is_active = step.id == current;
        let is_completed = step.id < current;

        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let icon = if is_completed { "✓" } else { step.icon };
        spans.push(Span::styled(format!("{icon} {}", step.title), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    // Progress counter on the right
    let progress = format!("Step {current} / {} ", STEPS.len());
    let progress_area = Rect {
        x: area.x + area.width.saturating_sub(progress.len() as u16),
        y: area.y,
        width: progress.len() as u16,
        height: 1,
    };
    let counter = Paragraph::new(progress).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(counter, progress_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission state indicator
    let indicator = match app.wizard.status() {
        SubmissionStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::DarkGray)),
        SubmissionStatus::InFlight => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionStatus::Completed => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    spans.push(indicator);

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current screen
fn get_hints(app: &App) -> String {
    if app.calendar.is_some() {
        return "←→↑↓:move  PgUp/PgDn:month  Enter:pick  Esc:close".to_string();
    }
    match app.wizard.state() {
        WizardState::Step(1) => "Tab:next  Enter:continue".to_string(),
        WizardState::Step(2) => "Tab:next  Enter:newline  Esc:back".to_string(),
        WizardState::Step(_) => "Tab:next  ←→:choose  Enter:finalize  Esc:back".to_string(),
        WizardState::Submitted => "Enter:new request  q:quit".to_string(),
    }
}
