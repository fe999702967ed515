pub mod encoding;
pub mod forwarder;

pub use crate::domain::model::{CapturedResponse, Query};
pub use crate::domain::ports::{ConfigProvider, FailureLog};
pub use crate::utils::error::Result;
