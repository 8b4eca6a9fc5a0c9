use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Teacher.as_str(), "teacher");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert_eq!(Role::from_str("teacher").unwrap(), Role::Teacher);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("principal").is_err());
    assert!(Role::from_str("Student").is_err());
}

#[test]
fn test_role_serde_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    let role: Role = serde_json::from_str("\"teacher\"").unwrap();
    assert_eq!(role, Role::Teacher);
}
