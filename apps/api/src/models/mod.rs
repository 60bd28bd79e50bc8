pub mod resume;

pub use resume::{JobRole, ResumeSubmission, ResumeType};
