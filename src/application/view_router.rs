// Active-view tracking
use crate::domain::view::ViewId;

/// Tracks which single view is active. `activate` is total and idempotent;
/// there is no history stack.
#[derive(Debug)]
pub struct ViewRouter {
    active: ViewId,
}

impl ViewRouter {
    pub fn new(initial: ViewId) -> Self {
        Self { active: initial }
    }

    pub fn activate(&mut self, view: ViewId) {
        self.active = view;
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.active == view
    }
}
