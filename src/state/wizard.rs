//! Wizard state machine for the multi-step request form
//!
//! The machine owns the request record, the per-field error map, the
//! current step and the submission status. Transitions are plain value
//! mutations so the machine stays testable independent of rendering and
//! networking; the async dispatch is driven from the outside between
//! `begin_submit` and `finish_submit`.

use super::{step_fields, validate, ErrorMap, Field, JobRequest, STEPS, WizardStep};
use chrono::NaiveDate;

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// On step `n`, `1 <= n <= STEPS.len()`
    Step(usize),
    /// Terminal confirmation screen, until `reset()`
    Submitted,
}

/// Outbound submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Dispatch running; blocks a second submission
    InFlight,
    Completed,
}

/// The form wizard: step cursor, record, errors and submission status
#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    record: JobRequest,
    errors: ErrorMap,
    status: SubmissionStatus,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Step(1),
            record: JobRequest::default(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::default(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn record(&self) -> &JobRequest {
        &self.record
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    /// Step definition for the current step, `None` once submitted
    pub fn current_step(&self) -> Option<&'static WizardStep> {
        match self.state {
            WizardState::Step(n) => STEPS.get(n - 1),
            WizardState::Submitted => None,
        }
    }

    pub fn on_last_step(&self) -> bool {
        self.state == WizardState::Step(STEPS.len())
    }

    /// Validation message for a field, if the last validation pass
    /// flagged it and it has not been edited since
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[cfg(test)]
    fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Fields collected on the current step, empty once submitted
    pub fn fields(&self) -> &'static [Field] {
        match self.state {
            WizardState::Step(n) => step_fields(n),
            WizardState::Submitted => &[],
        }
    }

    // Every edit goes through here: editing a field drops its stale
    // error without re-validating (the next advance recomputes).
    fn touch(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    fn editable(&self) -> bool {
        self.state != WizardState::Submitted
    }

    /// Append a character to a text field. Ignored on choice fields and
    /// once submitted.
    pub fn push_char(&mut self, field: Field, c: char) {
        if !self.editable() {
            return;
        }
        if let Some(value) = text_field_mut(&mut self.record, field) {
            value.push(c);
            self.touch(field);
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: Field) {
        if !self.editable() {
            return;
        }
        if let Some(value) = text_field_mut(&mut self.record, field) {
            value.pop();
            self.touch(field);
        }
    }

    /// Replace a text field wholesale (calendar picks, paste)
    pub fn set_text(&mut self, field: Field, new_value: String) {
        if !self.editable() {
            return;
        }
        if let Some(value) = text_field_mut(&mut self.record, field) {
            *value = new_value;
            self.touch(field);
        }
    }

    /// Cycle a choice field forward. Ignored on text fields.
    pub fn cycle_next(&mut self, field: Field) {
        if !self.editable() {
            return;
        }
        match field {
            Field::JobSite => self.record.job_site = self.record.job_site.toggle(),
            Field::ExperienceLevel => {
                self.record.experience_level = self.record.experience_level.next();
            }
            Field::SalaryRange => self.record.salary_range = self.record.salary_range.next(),
            _ => return,
        }
        self.touch(field);
    }

    /// Cycle a choice field backward
    pub fn cycle_prev(&mut self, field: Field) {
        if !self.editable() {
            return;
        }
        match field {
            Field::JobSite => self.record.job_site = self.record.job_site.toggle(),
            Field::ExperienceLevel => {
                self.record.experience_level = self.record.experience_level.prev();
            }
            Field::SalaryRange => self.record.salary_range = self.record.salary_range.prev(),
            _ => return,
        }
        self.touch(field);
    }

    /// Validate the current step and move to the next one.
    ///
    /// Returns true when the step changed. On validation failure the
    /// error map is replaced wholesale, so only fields invalid now stay
    /// flagged. The last step never advances; it submits instead.
    pub fn advance(&mut self, today: NaiveDate) -> bool {
        let WizardState::Step(step) = self.state else {
            return false;
        };
        if step >= STEPS.len() {
            return false;
        }
        let errors = validate(step, &self.record, today);
        if errors.is_empty() {
            self.errors.clear();
            self.state = WizardState::Step(step + 1);
            true
        } else {
            self.errors = errors;
            false
        }
    }

    /// Move back one step without validating; no-op on step 1 and once
    /// submitted. Errors and record are left untouched.
    pub fn retreat(&mut self) -> bool {
        if let WizardState::Step(step) = self.state {
            if step > 1 {
                self.state = WizardState::Step(step - 1);
                return true;
            }
        }
        false
    }

    /// Validate the final step and mark the submission in flight.
    ///
    /// Returns true when the caller should dispatch the record and then
    /// call [`finish_submit`](Self::finish_submit). Returns false when
    /// validation failed (errors populated, step kept) or a submission
    /// is already in flight.
    pub fn begin_submit(&mut self, today: NaiveDate) -> bool {
        let WizardState::Step(step) = self.state else {
            return false;
        };
        if step != STEPS.len() || self.status == SubmissionStatus::InFlight {
            return false;
        }
        let errors = validate(step, &self.record, today);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.status = SubmissionStatus::InFlight;
        true
    }

    /// Complete an in-flight submission, regardless of dispatch outcome
    pub fn finish_submit(&mut self) {
        if self.status == SubmissionStatus::InFlight {
            self.status = SubmissionStatus::Completed;
            self.state = WizardState::Submitted;
        }
    }

    /// Start over after a completed submission; no-op elsewhere
    pub fn reset(&mut self) {
        if self.state == WizardState::Submitted {
            *self = Self::new();
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

fn text_field_mut(record: &mut JobRequest, field: Field) -> Option<&mut String> {
    match field {
        Field::Email => Some(&mut record.email),
        Field::CompanyName => Some(&mut record.company_name),
        Field::JobTitle => Some(&mut record.job_title),
        Field::JobDescription => Some(&mut record.job_description),
        Field::WorkLocation => Some(&mut record.work_location),
        Field::ContactPhone => Some(&mut record.contact_phone),
        Field::Deadline => Some(&mut record.deadline),
        Field::JobSite | Field::ExperienceLevel | Field::SalaryRange => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ExperienceLevel, JobSite};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn type_text(wizard: &mut Wizard, field: Field, text: &str) {
        for c in text.chars() {
            wizard.push_char(field, c);
        }
    }

    fn fill_step1(wizard: &mut Wizard) {
        type_text(wizard, Field::Email, "a@b.com");
        type_text(wizard, Field::CompanyName, "Acme");
        type_text(wizard, Field::JobTitle, "Engineer");
    }

    fn fill_step3(wizard: &mut Wizard) {
        type_text(wizard, Field::WorkLocation, "Addis Ababa");
        type_text(wizard, Field::ContactPhone, "+251911223344");
        wizard.set_text(Field::Deadline, "2024-06-20".to_string());
    }

    /// Drive a fresh wizard to the last step with a valid record
    fn wizard_on_last_step() -> Wizard {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        assert!(wizard.advance(today()));
        type_text(&mut wizard, Field::JobDescription, "Build things");
        assert!(wizard.advance(today()));
        fill_step3(&mut wizard);
        wizard
    }

    mod transitions {
        use super::*;

        #[test]
        fn test_starts_on_step_one_idle() {
            let wizard = Wizard::new();
            assert_eq!(wizard.state(), WizardState::Step(1));
            assert_eq!(wizard.status(), SubmissionStatus::Idle);
            assert!(wizard.errors().is_empty());
            assert!(!wizard.is_submitted());
        }

        #[test]
        fn test_advance_with_valid_record_moves_forward() {
            let mut wizard = Wizard::new();
            fill_step1(&mut wizard);
            assert!(wizard.advance(today()));
            assert_eq!(wizard.state(), WizardState::Step(2));
            assert!(wizard.errors().is_empty());
        }

        #[test]
        fn test_advance_with_invalid_record_stays_put() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance(today()));
            assert_eq!(wizard.state(), WizardState::Step(1));
            assert_eq!(wizard.errors().len(), 3);
        }

        #[test]
        fn test_advance_replaces_error_map_wholesale() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance(today()));
            assert!(wizard.error(Field::CompanyName).is_some());

            // Fix two of three fields directly, leave the map stale,
            // then re-validate: only the still-broken field survives.
            wizard.set_text(Field::Email, "a@b.com".to_string());
            wizard.set_text(Field::CompanyName, "Acme".to_string());
            assert!(!wizard.advance(today()));
            assert_eq!(wizard.errors().len(), 1);
            assert!(wizard.error(Field::JobTitle).is_some());
        }

        #[test]
        fn test_advance_never_leaves_last_step() {
            let mut wizard = wizard_on_last_step();
            assert!(!wizard.advance(today()));
            assert_eq!(wizard.state(), WizardState::Step(3));
        }

        #[test]
        fn test_retreat_from_step_one_is_noop() {
            let mut wizard = Wizard::new();
            assert!(!wizard.retreat());
            assert_eq!(wizard.state(), WizardState::Step(1));
        }

        #[test]
        fn test_retreat_keeps_record_and_errors() {
            let mut wizard = Wizard::new();
            fill_step1(&mut wizard);
            assert!(wizard.advance(today()));
            assert!(!wizard.advance(today())); // step 2 invalid
            assert!(wizard.error(Field::JobDescription).is_some());

            assert!(wizard.retreat());
            assert_eq!(wizard.state(), WizardState::Step(1));
            assert_eq!(wizard.record().email, "a@b.com");
            assert!(wizard.error(Field::JobDescription).is_some());
        }

        #[test]
        fn test_current_step_follows_state() {
            let mut wizard = Wizard::new();
            assert_eq!(wizard.current_step().unwrap().title, "Basics");
            fill_step1(&mut wizard);
            wizard.advance(today());
            assert_eq!(wizard.current_step().unwrap().title, "The Role");
            assert!(!wizard.on_last_step());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_editing_clears_exactly_that_fields_error() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance(today()));
            assert_eq!(wizard.errors().len(), 3);

            wizard.push_char(Field::Email, 'a');
            assert!(wizard.error(Field::Email).is_none());
            assert!(wizard.error(Field::CompanyName).is_some());
            assert!(wizard.error(Field::JobTitle).is_some());
        }

        #[test]
        fn test_backspace_clears_error_too() {
            let mut wizard = Wizard::new();
            type_text(&mut wizard, Field::Email, "x");
            assert!(!wizard.advance(today()));
            assert!(wizard.error(Field::Email).is_some());

            wizard.pop_char(Field::Email);
            assert!(wizard.error(Field::Email).is_none());
        }

        #[test]
        fn test_editing_does_not_revalidate() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance(today()));

            // Still invalid after the edit, but optimistically cleared.
            wizard.push_char(Field::Email, '@');
            assert!(wizard.error(Field::Email).is_none());
        }

        #[test]
        fn test_cycle_choice_fields() {
            let mut wizard = Wizard::new();
            wizard.cycle_next(Field::JobSite);
            assert_eq!(wizard.record().job_site, JobSite::Remote);
            wizard.cycle_prev(Field::JobSite);
            assert_eq!(wizard.record().job_site, JobSite::OnSite);

            wizard.cycle_next(Field::ExperienceLevel);
            assert_eq!(
                wizard.record().experience_level,
                ExperienceLevel::MidLevel
            );
            wizard.cycle_prev(Field::ExperienceLevel);
            assert_eq!(
                wizard.record().experience_level,
                ExperienceLevel::EntryLevel
            );
        }

        #[test]
        fn test_cycle_ignores_text_fields() {
            let mut wizard = Wizard::new();
            wizard.cycle_next(Field::Email);
            assert!(wizard.record().email.is_empty());
        }

        #[test]
        fn test_push_char_ignores_choice_fields() {
            let mut wizard = Wizard::new();
            wizard.push_char(Field::JobSite, 'x');
            assert_eq!(wizard.record().job_site, JobSite::OnSite);
        }

        #[test]
        fn test_edits_are_ignored_once_submitted() {
            let mut wizard = wizard_on_last_step();
            assert!(wizard.begin_submit(today()));
            wizard.finish_submit();

            wizard.push_char(Field::Email, 'x');
            wizard.set_text(Field::CompanyName, "Other".to_string());
            wizard.cycle_next(Field::JobSite);
            assert_eq!(wizard.record().email, "a@b.com");
            assert_eq!(wizard.record().company_name, "Acme");
            assert_eq!(wizard.record().job_site, JobSite::OnSite);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_begin_submit_validates_final_step() {
            let mut wizard = Wizard::new();
            fill_step1(&mut wizard);
            wizard.advance(today());
            type_text(&mut wizard, Field::JobDescription, "Build things");
            wizard.advance(today());

            // Step 3 untouched: submission refused, errors populated.
            assert!(!wizard.begin_submit(today()));
            assert_eq!(wizard.state(), WizardState::Step(3));
            assert_eq!(wizard.status(), SubmissionStatus::Idle);
            assert!(wizard.error(Field::ContactPhone).is_some());
            assert!(wizard.error(Field::Deadline).is_some());
            assert!(wizard.error(Field::WorkLocation).is_some());
        }

        #[test]
        fn test_begin_submit_only_valid_on_last_step() {
            let mut wizard = Wizard::new();
            fill_step1(&mut wizard);
            assert!(!wizard.begin_submit(today()));
            assert_eq!(wizard.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_submit_lifecycle() {
            let mut wizard = wizard_on_last_step();
            assert!(wizard.begin_submit(today()));
            assert_eq!(wizard.status(), SubmissionStatus::InFlight);
            assert_eq!(wizard.state(), WizardState::Step(3));

            wizard.finish_submit();
            assert_eq!(wizard.status(), SubmissionStatus::Completed);
            assert!(wizard.is_submitted());
            assert!(wizard.current_step().is_none());
        }

        #[test]
        fn test_in_flight_blocks_second_submission() {
            let mut wizard = wizard_on_last_step();
            assert!(wizard.begin_submit(today()));
            assert!(!wizard.begin_submit(today()));
        }

        #[test]
        fn test_finish_without_begin_is_noop() {
            let mut wizard = wizard_on_last_step();
            wizard.finish_submit();
            assert_eq!(wizard.status(), SubmissionStatus::Idle);
            assert!(!wizard.is_submitted());
        }

        #[test]
        fn test_reset_restores_initial_state() {
            let mut wizard = wizard_on_last_step();
            assert!(wizard.begin_submit(today()));
            wizard.finish_submit();

            wizard.reset();
            assert_eq!(wizard.state(), WizardState::Step(1));
            assert_eq!(wizard.status(), SubmissionStatus::Idle);
            assert!(wizard.errors().is_empty());
            assert!(wizard.record().email.is_empty());
            assert!(wizard.record().deadline.is_empty());
        }

        #[test]
        fn test_reset_before_submission_is_noop() {
            let mut wizard = Wizard::new();
            fill_step1(&mut wizard);
            wizard.advance(today());
            wizard.reset();
            assert_eq!(wizard.state(), WizardState::Step(2));
            assert_eq!(wizard.record().email, "a@b.com");
        }
    }
}
