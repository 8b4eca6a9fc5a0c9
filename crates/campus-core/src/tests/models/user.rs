use crate::{ApprovalStatus, ProfileUpdate, Role, StudentProfile, User};

fn sample_user() -> User {
    User {
        id: 42,
        username: "jdoe".to_string(),
        email: "jdoe@demo.edu".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        role: Role::Student,
        approval_status: ApprovalStatus::Approved,
        is_verified: true,
        created_at: chrono::Utc::now(),
        student_profile: Some(StudentProfile {
            student_id: "S-2024-0042".to_string(),
            gpa: Some(3.7),
            grade_level: Some("sophomore".to_string()),
        }),
        teacher_profile: None,
    }
}

#[test]
fn test_display_name_from_names() {
    let user = sample_user();
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn test_display_name_falls_back_to_username() {
    let mut user = sample_user();
    user.first_name = String::new();
    user.last_name = "  ".to_string();
    assert_eq!(user.display_name(), "jdoe");
}

#[test]
fn test_is_approved() {
    let mut user = sample_user();
    assert!(user.is_approved());
    user.approval_status = ApprovalStatus::Pending;
    assert!(!user.is_approved());
}

#[test]
fn test_apply_update_merges_present_fields_only() {
    let mut user = sample_user();
    let update = ProfileUpdate {
        first_name: Some("Janet".to_string()),
        last_name: None,
        email: None,
    };

    user.apply_update(&update);

    assert_eq!(user.first_name, "Janet");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.email, "jdoe@demo.edu");
    // Derived name follows the merge automatically
    assert_eq!(user.display_name(), "Janet Doe");
}

#[test]
fn test_user_deserializes_backend_shape() {
    let json = serde_json::json!({
        "id": 7,
        "username": "mlopez",
        "email": "mlopez@demo.edu",
        "first_name": "Maria",
        "last_name": "Lopez",
        "user_type": "teacher",
        "approval_status": "approved",
        "is_verified": true,
        "created_at": "2026-01-15T09:30:00Z",
        "teacher_profile": {
            "employee_id": "E-310",
            "department": "Mathematics",
            "teaching_rating": 4.6,
            "experience_years": 11
        }
    });

    let user: User = serde_json::from_value(json).unwrap();

    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.approval_status, ApprovalStatus::Approved);
    let profile = user.teacher_profile.unwrap();
    assert_eq!(profile.employee_id, "E-310");
    assert_eq!(profile.experience_years, Some(11));
    assert!(user.student_profile.is_none());
}

#[test]
fn test_user_deserializes_without_optional_fields() {
    let json = serde_json::json!({
        "id": 9,
        "username": "admin",
        "email": "admin@demo.edu",
        "first_name": "Site",
        "last_name": "Admin",
        "user_type": "admin",
        "created_at": "2026-01-01T00:00:00Z"
    });

    let user: User = serde_json::from_value(json).unwrap();

    // Missing approval_status defaults to pending, the server's initial state
    assert_eq!(user.approval_status, ApprovalStatus::Pending);
    assert!(!user.is_verified);
}
