//! Wire formats for the two submission endpoints

use crate::state::JobRequest;
use serde::Serialize;

/// Longest description excerpt included in the notification
const NOTIFY_DESCRIPTION_LIMIT: usize = 500;

/// Row inserted into the data store
#[derive(Debug, Serialize)]
pub struct JobRequestRow<'a> {
    pub email: &'a str,
    pub company_name: &'a str,
    pub job_title: &'a str,
    pub job_description: &'a str,
    pub work_location: &'a str,
    pub job_site: &'static str,
    pub experience_level: &'static str,
    pub salary_range: &'static str,
    pub contact_phone: &'a str,
    /// `null` when no deadline was entered
    pub deadline: Option<&'a str>,
}

impl<'a> JobRequestRow<'a> {
    pub fn from_record(record: &'a JobRequest) -> Self {
        Self {
            email: &record.email,
            company_name: &record.company_name,
            job_title: &record.job_title,
            job_description: &record.job_description,
            work_location: &record.work_location,
            job_site: record.job_site.wire(),
            experience_level: record.experience_level.label(),
            salary_range: record.salary_range.label(),
            contact_phone: &record.contact_phone,
            deadline: if record.deadline.is_empty() {
                None
            } else {
                Some(&record.deadline)
            },
        }
    }
}

/// Body of the bot `sendMessage` call
#[derive(Debug, Serialize)]
pub struct Notification<'a> {
    pub chat_id: &'a str,
    pub text: String,
    pub parse_mode: &'static str,
}

impl<'a> Notification<'a> {
    pub fn new(chat_id: &'a str, record: &JobRequest) -> Self {
        Self {
            chat_id,
            text: format_notification(record),
            parse_mode: "Markdown",
        }
    }
}

/// Markdown digest of a request, as posted to the hiring channel
pub fn format_notification(record: &JobRequest) -> String {
    let deadline = if record.deadline.is_empty() {
        "Not set"
    } else {
        record.deadline.as_str()
    };
    format!(
        "🚀 *New Recruitment Request*\n\n\
         *Company:* {}\n\
         *Job Title:* {}\n\
         *Email:* {}\n\
         *Phone:* {}\n\n\
         *Location:* {} ({})\n\
         *Experience:* {}\n\
         *Salary:* {}\n\
         *Deadline:* {}\n\n\
         *Description:*\n{}\n\n\
         #Afriwork #Recruitment #Hiring",
        record.company_name,
        record.job_title,
        record.email,
        record.contact_phone,
        record.work_location,
        record.job_site.wire(),
        record.experience_level.label(),
        record.salary_range.label(),
        deadline,
        excerpt(&record.job_description, NOTIFY_DESCRIPTION_LIMIT),
    )
}

// Keeps the cut on a char boundary; descriptions are often non-ASCII.
fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
