//! Application state and core logic

use crate::state::{CalendarState, Field, Wizard};
use crate::sync::{dispatch_all, JobSync};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The form state machine
    pub wizard: Wizard,
    /// Focused position: field index, then Back, then the primary button
    pub focus: usize,
    /// Open date picker, if any
    pub calendar: Option<CalendarState>,
    /// Outcome line for the status bar
    pub status_message: Option<String>,
    /// Submission client
    sync: Box<dyn JobSync>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance around a submission client
    pub fn new(sync: Box<dyn JobSync>) -> Self {
        Self {
            wizard: Wizard::new(),
            focus: 0,
            calendar: None,
            status_message: None,
            sync,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Field under the focus cursor, `None` on the footer buttons
    fn focused_field(&self) -> Option<Field> {
        self.wizard.fields().get(self.focus).copied()
    }

    // Focusable positions: the step's fields plus Back and the primary
    // button.
    fn focus_count(&self) -> usize {
        self.wizard.fields().len() + 2
    }

    fn next_focus(&mut self) {
        self.focus = (self.focus + 1) % self.focus_count();
    }

    fn prev_focus(&mut self) {
        let count = self.focus_count();
        self.focus = (self.focus + count - 1) % count;
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The date picker is modal
        if self.calendar.is_some() {
            self.handle_calendar_key(key);
            return Ok(());
        }

        // Clear any status message on key press
        self.status_message = None;

        if self.wizard.is_submitted() {
            self.handle_submitted_key(key);
            return Ok(());
        }

        self.handle_step_key(key).await
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let Some(calendar) = self.calendar.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left => calendar.prev_day(),
            KeyCode::Right => calendar.next_day(),
            KeyCode::Up => calendar.prev_week(),
            KeyCode::Down => calendar.next_week(),
            KeyCode::PageUp => calendar.prev_month(),
            KeyCode::PageDown => calendar.next_month(),
            KeyCode::Enter => {
                let picked = calendar.formatted();
                self.wizard.set_text(Field::Deadline, picked);
                self.calendar = None;
            }
            KeyCode::Esc => self.calendar = None,
            _ => {}
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.wizard.reset();
                self.focus = 0;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_step_key(&mut self, key: KeyEvent) -> Result<()> {
        let field_count = self.wizard.fields().len();
        let on_back = self.focus == field_count;
        let on_primary = self.focus == field_count + 1;
        let field = self.focused_field();

        match key.code {
            // Submit the step from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.advance_or_finalize().await
            }
            KeyCode::Tab | KeyCode::Down => self.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.prev_focus(),
            // Left/Right move between the footer buttons
            KeyCode::Left if on_primary => self.focus = field_count,
            KeyCode::Right if on_back => self.focus = field_count + 1,
            // and cycle choice fields
            KeyCode::Left => {
                if let Some(f) = field {
                    self.wizard.cycle_prev(f);
                }
            }
            KeyCode::Right => {
                if let Some(f) = field {
                    self.wizard.cycle_next(f);
                }
            }
            KeyCode::Enter if on_back => self.go_back(),
            KeyCode::Enter if on_primary => self.advance_or_finalize().await,
            KeyCode::Enter => match field {
                Some(Field::Deadline) => self.open_calendar(),
                // Enter in the description field adds a newline
                Some(Field::JobDescription) => self.wizard.push_char(Field::JobDescription, '\n'),
                Some(f @ (Field::JobSite | Field::ExperienceLevel | Field::SalaryRange)) => {
                    self.wizard.cycle_next(f)
                }
                Some(_) => self.advance_or_finalize().await,
                None => {}
            },
            KeyCode::Esc => self.go_back(),
            // The deadline is set through the picker only
            KeyCode::Char(c) => {
                if let Some(f) = field {
                    if f != Field::Deadline {
                        self.wizard.push_char(f, c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(f) = field {
                    if f != Field::Deadline {
                        self.wizard.pop_char(f);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn go_back(&mut self) {
        if self.wizard.retreat() {
            self.focus = 0;
        }
    }

    fn open_calendar(&mut self) {
        let today = Local::now().date_naive();
        self.calendar = Some(CalendarState::open(&self.wizard.record().deadline, today));
    }

    async fn advance_or_finalize(&mut self) {
        if self.wizard.on_last_step() {
            self.finalize().await;
        } else if self.wizard.advance(Local::now().date_naive()) {
            self.focus = 0;
        }
    }

    /// Validate the last step, dispatch to both endpoints, and show the
    /// confirmation screen. Endpoint failures are logged by the
    /// dispatcher and do not keep the form from completing.
    async fn finalize(&mut self) {
        if !self.wizard.begin_submit(Local::now().date_naive()) {
            return;
        }
        tracing::info!("Submitting recruitment request");
        dispatch_all(self.sync.as_ref(), self.wizard.record()).await;
        self.wizard.finish_submit();
        self.status_message = Some("Request sent".to_string());
        tracing::info!("Request submitted");
    }
}
