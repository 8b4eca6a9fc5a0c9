
use crate::notifier::{Notice, Notifier};

use campus_core::{ApprovalStatus, Role, User};

use std::sync::{Arc, Mutex};

/// Notice sink that records everything for assertions
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub(crate) fn taken(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

pub(crate) fn sample_user(role: Role, approval_status: ApprovalStatus) -> User {
    User {
        id: 1,
        username: "jdoe".to_string(),
        email: "jdoe@demo.edu".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        role,
        approval_status,
        is_verified: true,
        created_at: chrono::Utc::now(),
        student_profile: None,
        teacher_profile: None,
    }
}
