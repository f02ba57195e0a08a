/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (WAF backend, rendering surface).
pub mod dashboard_presenter;
pub mod waf_api;

pub use dashboard_presenter::DashboardPresenter;
pub use waf_api::WafApi;
