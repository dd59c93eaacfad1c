//! Form state: request record, step table, validation and the wizard machine

mod calendar;
mod record;
mod steps;
mod validation;
mod wizard;

pub use calendar::*;
pub use record::*;
pub use steps::*;
pub use validation::*;
pub use wizard::*;
