use crate::utils::error::Result;
use std::time::Duration;

/// 失敗時追加寫入回應內容的目的地
pub trait FailureLog: Send + Sync {
    fn append(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn path(&self) -> &str;
    fn log_path(&self) -> &str;
    fn connect_timeout(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
}
