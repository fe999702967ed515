pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use config::{AppendFileLog, ForwarderConfig};
pub use core::{forwarder::QueryForwarder, CapturedResponse, Query};
pub use utils::error::{FaultKind, ForwardError, Result};
