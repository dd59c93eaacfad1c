//! UI module for rendering the form wizard

mod calendar;
mod components;
mod fields;
mod layout;
mod steps;

use crate::app::App;
use crate::state::WizardState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.wizard.is_submitted() {
        let content_area = layout::create_layout_no_stepper(area);
        steps::draw_submitted(frame, content_area);
        layout::draw_status_bar(frame, app);
        return;
    }

    let (header_area, content_area) = layout::create_layout(area);
    layout::draw_stepper(frame, header_area, app);

    match app.wizard.state() {
        WizardState::Step(2) => steps::draw_role(frame, content_area, app),
        WizardState::Step(3) => steps::draw_logistics(frame, content_area, app),
        _ => steps::draw_basics(frame, content_area, app),
    }

    if let Some(cal) = &app.calendar {
        calendar::draw_overlay(frame, cal);
    }

    layout::draw_status_bar(frame, app);
}
