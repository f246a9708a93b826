//! Application layer errors

use thiserror::Error;

/// Command port session errors.
///
/// The two variants keep "the host is not there" apart from "the host went
/// away mid-session"; callers log either one and move on.
#[derive(Error, Debug)]
pub enum PortError {
    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("transmission failed: {0}")]
    Transmit(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Write error: {0}")]
    Write(String),
}
