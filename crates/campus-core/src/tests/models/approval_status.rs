use crate::ApprovalStatus;

use std::str::FromStr;

#[test]
fn test_approval_status_as_str() {
    assert_eq!(ApprovalStatus::Pending.as_str(), "pending");
    assert_eq!(ApprovalStatus::Approved.as_str(), "approved");
    assert_eq!(ApprovalStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_approval_status_from_str() {
    assert_eq!(
        ApprovalStatus::from_str("pending").unwrap(),
        ApprovalStatus::Pending
    );
    assert_eq!(
        ApprovalStatus::from_str("approved").unwrap(),
        ApprovalStatus::Approved
    );
    assert_eq!(
        ApprovalStatus::from_str("rejected").unwrap(),
        ApprovalStatus::Rejected
    );
    assert!(ApprovalStatus::from_str("unknown").is_err());
}

#[test]
fn test_approval_status_default_pending() {
    assert_eq!(ApprovalStatus::default(), ApprovalStatus::Pending);
}

#[test]
fn test_transitions_forward_only() {
    use ApprovalStatus::*;

    assert!(Pending.can_transition_to(Approved));
    assert!(Pending.can_transition_to(Rejected));

    // Review decisions cannot be undone
    assert!(!Approved.can_transition_to(Pending));
    assert!(!Approved.can_transition_to(Rejected));
    assert!(!Rejected.can_transition_to(Pending));
    assert!(!Rejected.can_transition_to(Approved));
}

#[test]
fn test_transitions_self_is_legal() {
    use ApprovalStatus::*;

    assert!(Pending.can_transition_to(Pending));
    assert!(Approved.can_transition_to(Approved));
    assert!(Rejected.can_transition_to(Rejected));
}
