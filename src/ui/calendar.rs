//! Month-grid overlay for picking the deadline

use crate::state::{CalendarState, DAY_NAMES};
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the date picker centered over the form
pub fn draw_overlay(frame: &mut Frame, calendar: &CalendarState) {
    let area = frame.area();

    let dialog_width = 32u16.min(area.width);
    let dialog_height = 12u16.min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            calendar.month_label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            DAY_NAMES.join("  "),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for week in calendar.weeks() {
        let mut spans = Vec::new();
        for (idx, cell) in week.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            match cell {
                Some(day) if *day == calendar.cursor() => spans.push(Span::styled(
                    format!("{:>2}", day.day()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                // Past days are out of reach for the cursor
                Some(day) if *day < calendar.today() => spans.push(Span::styled(
                    format!("{:>2}", day.day()),
                    Style::default().fg(Color::DarkGray),
                )),
                Some(day) => spans.push(Span::raw(format!("{:>2}", day.day()))),
                None => spans.push(Span::raw("  ")),
            }
        }
        content.push(Line::from(spans));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" pick  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Deadline ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}
