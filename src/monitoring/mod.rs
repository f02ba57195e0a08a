/// Monitoring domain - pure types and policies for WAF event monitoring
///
/// Nothing in this module performs I/O; adapters translate wire data into
/// these types and read models project them for display.
pub mod domain;
pub mod policies;
