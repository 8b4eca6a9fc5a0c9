use serde::{Deserialize, Serialize};

/// Teacher-specific attributes attached to a [`User`](crate::User).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    /// Institution-assigned employee number
    pub employee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Aggregate student rating, maintained server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
}
