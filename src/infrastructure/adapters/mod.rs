//! Adapters for external endpoints

pub mod command_port;
