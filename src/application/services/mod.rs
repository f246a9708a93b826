//! Application services - Plugin lifecycle orchestration

pub mod plugin_service;

pub use plugin_service::PluginService;
