use campus_core::{Role, RoleDetails};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AuthCommands {
    /// Sign in with a username or email
    Login {
        /// Username or email
        identifier: String,

        #[arg(long)]
        password: String,

        /// Account role: student, teacher or admin
        #[arg(long)]
        role: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        /// Account role: student, teacher or admin
        #[arg(long)]
        role: String,

        /// Student number (student accounts)
        #[arg(long)]
        student_id: Option<String>,

        /// Grade level (student accounts)
        #[arg(long)]
        grade_level: Option<String>,

        /// Employee number (teacher accounts)
        #[arg(long)]
        employee_id: Option<String>,

        /// Department (teacher accounts)
        #[arg(long)]
        department: Option<String>,

        /// Years of experience (teacher accounts)
        #[arg(long)]
        experience_years: Option<u32>,
    },

    /// Sign out
    Logout,

    /// Show the current identity
    Whoami,
}

/// Flags accepted by `auth register` that belong to a role variant.
pub(crate) struct RoleFlags {
    pub student_id: Option<String>,
    pub grade_level: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub experience_years: Option<u32>,
}

/// Assemble the tagged role details, rejecting flags that belong to a
/// different role than the one being registered.
pub(crate) fn registration_details(role: Role, flags: RoleFlags) -> Result<RoleDetails, String> {
    match role {
        Role::Student => {
            if flags.employee_id.is_some()
                || flags.department.is_some()
                || flags.experience_years.is_some()
            {
                return Err("teacher flags are not valid for a student account".to_string());
            }
            let Some(student_id) = flags.student_id else {
                return Err("--student-id is required for a student account".to_string());
            };
            Ok(RoleDetails::Student {
                student_id,
                gpa: None,
                grade_level: flags.grade_level,
            })
        }
        Role::Teacher => {
            if flags.student_id.is_some() || flags.grade_level.is_some() {
                return Err("student flags are not valid for a teacher account".to_string());
            }
            let Some(employee_id) = flags.employee_id else {
                return Err("--employee-id is required for a teacher account".to_string());
            };
            Ok(RoleDetails::Teacher {
                employee_id,
                department: flags.department,
                experience_years: flags.experience_years,
            })
        }
        Role::Admin => {
            if flags.student_id.is_some()
                || flags.grade_level.is_some()
                || flags.employee_id.is_some()
                || flags.department.is_some()
                || flags.experience_years.is_some()
            {
                return Err("role flags are not valid for an admin account".to_string());
            }
            Ok(RoleDetails::Admin)
        }
    }
}
