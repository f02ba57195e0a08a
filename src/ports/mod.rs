/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - operator
/// interactions) and outbound ports (driven ports - backend API, rendering).
pub mod inbound;
pub mod outbound;
