//! Screen drawing for the three form steps and the confirmation

use super::components::{render_button, BUTTON_HEIGHT};
use super::fields::{draw_input, draw_picker, draw_radio, draw_select, draw_textarea};
use crate::app::App;
use crate::state::{Field, JobSite, SubmissionStatus, WizardState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn form_block() -> Block<'static> {
    Block::default()
        .title(" New Recruitment Request ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Step 1: contact and company basics
pub fn draw_basics(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(form_block(), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Company
            Constraint::Length(3), // Job title
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT), // Footer
        ])
        .margin(1)
        .split(area);

    let record = app.wizard.record();

    draw_input(
        frame,
        chunks[0],
        Field::Email.label(),
        true,
        &record.email,
        "hello@company.com",
        app.wizard.error(Field::Email),
        app.focus == 0,
    );
    draw_input(
        frame,
        chunks[1],
        Field::CompanyName.label(),
        true,
        &record.company_name,
        "Legal entity name",
        app.wizard.error(Field::CompanyName),
        app.focus == 1,
    );
    draw_input(
        frame,
        chunks[2],
        Field::JobTitle.label(),
        true,
        &record.job_title,
        "e.g. Senior Visual Designer",
        app.wizard.error(Field::JobTitle),
        app.focus == 2,
    );

    draw_footer(frame, chunks[4], app);
}

/// Step 2: the role description
pub fn draw_role(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(form_block(), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Description
            Constraint::Length(BUTTON_HEIGHT), // Footer
        ])
        .margin(1)
        .split(area);

    draw_textarea(
        frame,
        chunks[0],
        Field::JobDescription.label(),
        true,
        &app.wizard.record().job_description,
        "Explain the responsibilities, expectations, and goals for this position...",
        app.wizard.error(Field::JobDescription),
        app.focus == 0,
    );

    draw_footer(frame, chunks[1], app);
}

/// Step 3: logistics, paired two to a row
pub fn draw_logistics(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(form_block(), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Location | Phone
            Constraint::Length(3), // Deadline | Seniority
            Constraint::Length(3), // Work style | Salary
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT), // Footer
        ])
        .margin(1)
        .split(area);

    let pair = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };

    let record = app.wizard.record();

    let row = pair(rows[0]);
    draw_input(
        frame,
        row[0],
        Field::WorkLocation.label(),
        true,
        &record.work_location,
        "Addis Ababa",
        app.wizard.error(Field::WorkLocation),
        app.focus == 0,
    );
    draw_input(
        frame,
        row[1],
        Field::ContactPhone.label(),
        true,
        &record.contact_phone,
        "+251 911 223344",
        app.wizard.error(Field::ContactPhone),
        app.focus == 1,
    );

    let row = pair(rows[1]);
    draw_picker(
        frame,
        row[0],
        Field::Deadline.label(),
        true,
        &record.deadline,
        "Select a date...",
        app.wizard.error(Field::Deadline),
        app.focus == 2,
    );
    draw_select(
        frame,
        row[1],
        Field::ExperienceLevel.label(),
        record.experience_level.label(),
        app.focus == 3,
    );

    let row = pair(rows[2]);
    draw_radio(
        frame,
        row[0],
        Field::JobSite.label(),
        [JobSite::OnSite.label(), JobSite::Remote.label()],
        match record.job_site {
            JobSite::OnSite => 0,
            JobSite::Remote => 1,
        },
        app.focus == 4,
    );
    draw_select(
        frame,
        row[1],
        Field::SalaryRange.label(),
        record.salary_range.label(),
        app.focus == 5,
    );

    draw_footer(frame, rows[4], app);
}

/// Back on the left, primary action on the right
fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Back
            Constraint::Min(0),
            Constraint::Length(20), // Primary
        ])
        .split(area);

    let field_count = app.wizard.fields().len();
    let on_first = app.wizard.state() == WizardState::Step(1);

    render_button(
        frame,
        chunks[0],
        "◂ Back",
        app.focus == field_count,
        !on_first,
        None,
    );

    let syncing = app.wizard.status() == SubmissionStatus::InFlight;
    let label = if syncing {
        "Syncing..."
    } else if app.wizard.on_last_step() {
        "Finalize"
    } else {
        "Next ▸"
    };
    render_button(
        frame,
        chunks[2],
        label,
        app.focus == field_count + 1,
        !syncing,
        Some(Color::Green),
    );
}

/// Confirmation screen shown after the request goes out
pub fn draw_submitted(frame: &mut Frame, area: Rect) {
    let card_width = 44u16.min(area.width);
    let card_height = 13u16.min(area.height);
    let card = Rect {
        x: area.x + (area.width.saturating_sub(card_width)) / 2,
        y: area.y + (area.height.saturating_sub(card_height)) / 2,
        width: card_width,
        height: card_height,
    };

    let content = vec![
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Sent",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("We've received your request."),
        Line::from("A specialist will contact you soon."),
        Line::from(""),
        Line::from(Span::styled(
            "⛁ Synced to Cloud",
            Style::default().fg(Color::Blue),
        )),
        Line::from(Span::styled(
            "➤ Sent to Admin",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" new request  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let card_widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(card_widget, card);
}
