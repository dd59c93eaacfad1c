//! Recruitment request record and its field definitions

/// Work style for the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSite {
    #[default]
    OnSite,
    Remote,
}

impl JobSite {
    pub fn toggle(&self) -> Self {
        match self {
            Self::OnSite => Self::Remote,
            Self::Remote => Self::OnSite,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnSite => "On-Site",
            Self::Remote => "Remote",
        }
    }

    /// Value stored in the `job_site` column
    pub fn wire(&self) -> &'static str {
        match self {
            Self::OnSite => "ON_SITE",
            Self::Remote => "REMOTE",
        }
    }
}

/// Seniority of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    #[default]
    EntryLevel,
    MidLevel,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn next(&self) -> Self {
        match self {
            Self::EntryLevel => Self::MidLevel,
            Self::MidLevel => Self::Senior,
            Self::Senior => Self::Lead,
            Self::Lead => Self::EntryLevel,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::EntryLevel => Self::Lead,
            Self::MidLevel => Self::EntryLevel,
            Self::Senior => Self::MidLevel,
            Self::Lead => Self::Senior,
        }
    }

    /// Display label, also the value stored in the `experience_level` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry Level",
            Self::MidLevel => "Mid Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }
}

/// Monthly budget band for the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalaryRange {
    #[default]
    Under20k,
    From20kTo50k,
    From50kTo100k,
    Above100k,
    Negotiable,
}

impl SalaryRange {
    pub fn next(&self) -> Self {
        match self {
            Self::Under20k => Self::From20kTo50k,
            Self::From20kTo50k => Self::From50kTo100k,
            Self::From50kTo100k => Self::Above100k,
            Self::Above100k => Self::Negotiable,
            Self::Negotiable => Self::Under20k,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Under20k => Self::Negotiable,
            Self::From20kTo50k => Self::Under20k,
            Self::From50kTo100k => Self::From20kTo50k,
            Self::Above100k => Self::From50kTo100k,
            Self::Negotiable => Self::Above100k,
        }
    }

    /// Display label, also the value stored in the `salary_range` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Under20k => "Under 20K ETB",
            Self::From20kTo50k => "20K - 50K ETB",
            Self::From50kTo100k => "50K - 100K ETB",
            Self::Above100k => "Above 100K ETB",
            Self::Negotiable => "Negotiable",
        }
    }
}

/// Identifies one editable field of the request.
/// Used as the error-map key and as the target of update events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    CompanyName,
    JobTitle,
    JobDescription,
    WorkLocation,
    JobSite,
    ExperienceLevel,
    SalaryRange,
    ContactPhone,
    Deadline,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Business Email",
            Self::CompanyName => "Company Name",
            Self::JobTitle => "Job Title",
            Self::JobDescription => "Job Description",
            Self::WorkLocation => "Location",
            Self::JobSite => "Work Style",
            Self::ExperienceLevel => "Seniority",
            Self::SalaryRange => "Salary Budget",
            Self::ContactPhone => "Contact Phone",
            Self::Deadline => "Deadline",
        }
    }
}

/// A recruitment request as entered by the recruiter.
///
/// Owned exclusively by the wizard state machine; everything else sees
/// it through shared references.
#[derive(Debug, Clone, Default)]
pub struct JobRequest {
    pub email: String,
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    pub work_location: String,
    pub job_site: JobSite,
    pub experience_level: ExperienceLevel,
    pub salary_range: SalaryRange,
    pub contact_phone: String,
    /// ISO `YYYY-MM-DD`, empty until a deadline is picked
    pub deadline: String,
}
