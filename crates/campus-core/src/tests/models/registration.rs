use crate::{CoreError, Registration, Role, RoleDetails};

fn student_registration() -> Registration {
    Registration {
        username: "jdoe".to_string(),
        email: "jdoe@demo.edu".to_string(),
        password: "hunter22".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        details: RoleDetails::Student {
            student_id: "S-2024-0042".to_string(),
            gpa: None,
            grade_level: Some("10".to_string()),
        },
    }
}

#[test]
fn test_role_derived_from_details() {
    assert_eq!(student_registration().role(), Role::Student);

    let teacher = Registration {
        details: RoleDetails::Teacher {
            employee_id: "E-310".to_string(),
            department: None,
            experience_years: None,
        },
        ..student_registration()
    };
    assert_eq!(teacher.role(), Role::Teacher);
}

#[test]
fn test_validate_accepts_complete_registration() {
    assert!(student_registration().validate().is_ok());
}

#[test]
fn test_validate_rejects_blank_username() {
    let reg = Registration {
        username: "   ".to_string(),
        ..student_registration()
    };
    assert!(matches!(
        reg.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_validate_rejects_bad_email() {
    let reg = Registration {
        email: "not-an-email".to_string(),
        ..student_registration()
    };
    assert!(reg.validate().is_err());
}

#[test]
fn test_validate_rejects_short_password() {
    let reg = Registration {
        password: "abc12".to_string(),
        ..student_registration()
    };
    assert!(reg.validate().is_err());

    let reg = Registration {
        password: "abc123".to_string(),
        ..student_registration()
    };
    assert!(reg.validate().is_ok());
}

#[test]
fn test_validate_rejects_blank_role_identifier() {
    let reg = Registration {
        details: RoleDetails::Student {
            student_id: String::new(),
            gpa: None,
            grade_level: None,
        },
        ..student_registration()
    };
    assert!(reg.validate().is_err());

    let reg = Registration {
        details: RoleDetails::Teacher {
            employee_id: " ".to_string(),
            department: None,
            experience_years: None,
        },
        ..student_registration()
    };
    assert!(reg.validate().is_err());
}

#[test]
fn test_validate_admin_needs_base_fields_only() {
    let reg = Registration {
        details: RoleDetails::Admin,
        ..student_registration()
    };
    assert!(reg.validate().is_ok());
}

#[test]
fn test_serializes_as_flat_object_tagged_by_user_type() {
    let value = serde_json::to_value(student_registration()).unwrap();

    assert_eq!(value["user_type"], "student");
    assert_eq!(value["username"], "jdoe");
    assert_eq!(value["student_id"], "S-2024-0042");
    assert_eq!(value["grade_level"], "10");
    // Wrong-variant and absent fields never appear on the wire
    assert!(value.get("employee_id").is_none());
    assert!(value.get("gpa").is_none());
}

#[test]
fn test_deserializes_teacher_variant() {
    let json = serde_json::json!({
        "username": "mlopez",
        "email": "mlopez@demo.edu",
        "password": "hunter22",
        "first_name": "Maria",
        "last_name": "Lopez",
        "user_type": "teacher",
        "employee_id": "E-310",
        "department": "Mathematics"
    });

    let reg: Registration = serde_json::from_value(json).unwrap();

    assert_eq!(reg.role(), Role::Teacher);
    assert!(matches!(
        reg.details,
        RoleDetails::Teacher { ref employee_id, .. } if employee_id == "E-310"
    ));
}
