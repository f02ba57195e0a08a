/// Inbound adapters - Operator input driving the application core
pub mod operator_command;

pub use operator_command::OperatorCommand;
