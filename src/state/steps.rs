//! Wizard step definitions

use super::Field;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    /// 1-based step number
    pub id: usize,
    pub title: &'static str,
    /// Glyph shown in the stepper header while the step is pending or active
    pub icon: &'static str,
}

/// The fixed step sequence. Step numbers used elsewhere are 1-based
/// indices into this array.
pub const STEPS: [WizardStep; 3] = [
    WizardStep {
        id: 1,
        title: "Basics",
        icon: "✉",
    },
    WizardStep {
        id: 2,
        title: "The Role",
        icon: "✎",
    },
    WizardStep {
        id: 3,
        title: "Logistics",
        icon: "➤",
    },
];

/// Fields collected on a step, in focus-traversal order.
/// Returns an empty slice for out-of-range step numbers.
pub fn step_fields(step: usize) -> &'static [Field] {
    match step {
        1 => &[Field::Email, Field::CompanyName, Field::JobTitle],
        2 => &[Field::JobDescription],
        3 => &[
            Field::WorkLocation,
            Field::ContactPhone,
            Field::Deadline,
            Field::ExperienceLevel,
            Field::JobSite,
            Field::SalaryRange,
        ],
        _ => &[],
    }
}
