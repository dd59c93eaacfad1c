//! Field rendering for the form steps

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// The validation message rides in the title so a three-row field can
// show it without growing.
fn field_block(
    label: &str,
    required: bool,
    error: Option<&'static str>,
    is_active: bool,
) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {label} "))];
    if required {
        title.push(Span::styled("* ", Style::default().fg(Color::Red)));
    }
    if let Some(msg) = error {
        title.push(Span::styled(
            format!("✗ {msg} "),
            Style::default().fg(Color::Red),
        ));
    }

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Draw a single-line text input
#[allow(clippy::too_many_arguments)]
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    required: bool,
    value: &str,
    placeholder: &str,
    error: Option<&'static str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(label, required, error, is_active)),
        area,
    );
}

/// Draw a multi-line text area
#[allow(clippy::too_many_arguments)]
pub fn draw_textarea(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    required: bool,
    value: &str,
    placeholder: &str,
    error: Option<&'static str>,
    is_active: bool,
) {
    let block = field_block(label, required, error, is_active);

    if value.is_empty() && !is_active {
        let content = Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
        return;
    }

    let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        } else {
            lines.push(Line::from(cursor));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Draw a cycling select; arrows hint at Left/Right when active.
/// Choice fields always hold a value, so no required marker.
pub fn draw_select(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = if is_active {
        format!("◂ {value} ▸")
    } else {
        value.to_string()
    };

    let content = Paragraph::new(Line::from(Span::styled(text, style)));
    frame.render_widget(content.block(field_block(label, false, None, is_active)), area);
}

/// Draw a two-option radio row
pub fn draw_radio(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: [&str; 2],
    selected: usize,
    is_active: bool,
) {
    let mut spans = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let marker = if idx == selected { "(•)" } else { "( )" };
        let style = if idx == selected {
            if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
    }

    let content = Paragraph::new(Line::from(spans));
    frame.render_widget(content.block(field_block(label, false, None, is_active)), area);
}

/// Draw a date field that opens the picker on Enter
#[allow(clippy::too_many_arguments)]
pub fn draw_picker(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    required: bool,
    value: &str,
    placeholder: &str,
    error: Option<&'static str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if value.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(if is_active { " ▾" } else { "" }, style),
        ]))
    };

    frame.render_widget(
        content.block(field_block(label, required, error, is_active)),
        area,
    );
}
