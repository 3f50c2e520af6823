//! Shared application state for the web server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use loglens_client::DetectorClient;

/// The two independent upload workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Train,
    Detect,
}

/// Shared state injected into every Axum handler.
///
/// Each workflow gets its own in-flight flag so a pending training upload
/// never blocks a detection upload, and a duplicate submission of the same
/// workflow is rejected before any outbound request is made.
pub struct AppState {
    pub detector: DetectorClient,
    train_busy: AtomicBool,
    detect_busy: AtomicBool,
}

impl AppState {
    pub fn new(detector: DetectorClient) -> Self {
        Self {
            detector,
            train_busy: AtomicBool::new(false),
            detect_busy: AtomicBool::new(false),
        }
    }

    /// Claim the in-flight slot for one workflow. Returns a guard that
    /// releases the slot when dropped, or `None` while a request for that
    /// workflow is already pending.
    pub fn try_begin(self: &Arc<Self>, workflow: Workflow) -> Option<InflightGuard> {
        let claimed = self
            .flag(workflow)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        claimed.then(|| InflightGuard {
            state: Arc::clone(self),
            workflow,
        })
    }

    pub fn is_busy(&self, workflow: Workflow) -> bool {
        self.flag(workflow).load(Ordering::Acquire)
    }

    fn flag(&self, workflow: Workflow) -> &AtomicBool {
        match workflow {
            Workflow::Train => &self.train_busy,
            Workflow::Detect => &self.detect_busy,
        }
    }
}

/// RAII claim on a workflow's in-flight slot.
pub struct InflightGuard {
    state: Arc<AppState>,
    workflow: Workflow,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.state.flag(self.workflow).store(false, Ordering::Release);
    }
}

pub type SharedState = Arc<AppState>;
