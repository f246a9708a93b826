//! Domain entities - MEL statements understood by the host interpreter

pub mod command;

pub use command::MelCommand;
