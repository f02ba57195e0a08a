/// Mock implementations for testing
mod mock_waf_api;
mod recording_presenter;

pub use mock_waf_api::MockWafApi;
pub use recording_presenter::RecordingPresenter;
