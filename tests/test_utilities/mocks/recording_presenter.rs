use std::sync::Mutex;
use wafguard_monitor::prelude::*;

/// Mock DashboardPresenter that keeps every presented frame
pub struct RecordingPresenter {
    frames: Mutex<Vec<DashboardReadModel>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
        }
    }

    pub fn frames(&self) -> Vec<DashboardReadModel> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<DashboardReadModel> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPresenter for RecordingPresenter {
    fn present(&self, dashboard: &DashboardReadModel) -> Result<()> {
        self.frames.lock().unwrap().push(dashboard.clone());
        Ok(())
    }
}
