use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardPresenter port for the rendering surface
///
/// This port abstracts whatever displays the synchronized state
/// (a terminal, a test recorder, ...). Presenters receive a fully
/// projected read model and must not reach back into client state.
pub trait DashboardPresenter {
    /// Renders one frame of the dashboard
    ///
    /// # Errors
    /// Returns an error if writing to the output surface fails
    fn present(&self, dashboard: &DashboardReadModel) -> Result<()>;
}
