use serde::{Deserialize, Serialize};

/// Student-specific attributes attached to a [`User`](crate::User).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Institution-assigned student number (e.g., "S-2024-0913")
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    /// Free-form: "10", "sophomore", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
}
