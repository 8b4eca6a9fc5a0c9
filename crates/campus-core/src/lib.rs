pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::approval_status::ApprovalStatus;
pub use models::profile_update::ProfileUpdate;
pub use models::registration::{Registration, RoleDetails};
pub use models::role::Role;
pub use models::student_profile::StudentProfile;
pub use models::teacher_profile::TeacherProfile;
pub use models::user::User;

/// Minimum accepted password length, enforced client-side before any
/// network call.
pub const MIN_PASSWORD_LEN: usize = 6;

#[cfg(test)]
mod tests;
