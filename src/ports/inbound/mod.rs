/// Inbound ports (Driving ports) - Operator interfaces
///
/// These ports define the interfaces that input adapters (terminal input,
/// tests) use to drive the application core.
pub mod operator_action_port;

pub use operator_action_port::OperatorActionPort;
