/// Network adapters for the WAF backend API
mod waf_api_client;

pub use waf_api_client::{HttpWafApi, DEFAULT_API_BASE};
