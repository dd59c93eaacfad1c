//! Per-step validation of the request record

use super::{Field, JobRequest};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Field-keyed validation messages for one validation pass
pub type ErrorMap = HashMap<Field, &'static str>;

/// Format accepted for the deadline field
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Validate the fields of one step against the record.
///
/// Pure: the same `(step, record, today)` always produces the same map.
/// `today` is the local calendar date at midnight; a deadline equal to it
/// is accepted, anything earlier is rejected.
pub fn validate(step: usize, record: &JobRequest, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if step == 1 {
        if record.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !is_valid_email(&record.email) {
            errors.insert(Field::Email, "Please enter a valid business email");
        }
        if record.company_name.trim().is_empty() {
            errors.insert(Field::CompanyName, "Company name is required");
        }
        if record.job_title.trim().is_empty() {
            errors.insert(Field::JobTitle, "Job title is required");
        }
    }

    if step == 2 && record.job_description.trim().is_empty() {
        errors.insert(Field::JobDescription, "Please provide a job description");
    }

    if step == 3 {
        if record.contact_phone.trim().is_empty() {
            errors.insert(Field::ContactPhone, "Phone number is required");
        } else if !is_valid_phone(&record.contact_phone) {
            errors.insert(
                Field::ContactPhone,
                "Enter a valid phone number (e.g. +251 911...)",
            );
        }

        let deadline = record.deadline.trim();
        if deadline.is_empty() {
            errors.insert(Field::Deadline, "Submission deadline is required");
        } else {
            match NaiveDate::parse_from_str(deadline, DEADLINE_FORMAT) {
                Ok(date) if date < today => {
                    errors.insert(Field::Deadline, "Deadline cannot be in the past");
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(Field::Deadline, "Enter a valid date (YYYY-MM-DD)");
                }
            }
        }

        if record.work_location.trim().is_empty() {
            errors.insert(Field::WorkLocation, "Location is required");
        }
    }

    errors
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, non-empty
/// local part, domain with a non-empty dot-separated suffix.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, suffix)) => !host.is_empty() && !suffix.is_empty(),
        None => false,
    }
}

/// Optional leading `+` followed by 10-14 digits, internal whitespace
/// stripped before the check.
fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    (10..=14).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
