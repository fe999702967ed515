use crate::core::ConfigProvider;
use crate::utils::error::{ForwardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://pc3839.psi.ch";
pub const DEFAULT_PATH: &str = "/testplan/IOC_INFOS/ioc_select.php";
pub const DEFAULT_LOG_PATH: &str = "/tmp/ioc_select.log";

const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// 轉送設定。TOML 中每個欄位都可省略，省略時使用預設值。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ForwarderConfig {
    pub endpoint: String,
    pub path: String,
    pub log_path: String,
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            path: DEFAULT_PATH.to_string(),
            log_path: DEFAULT_LOG_PATH.to_string(),
            connect_timeout_seconds: 10,
            request_timeout_seconds: 30,
        }
    }
}

impl ForwarderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ForwardError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ForwardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for ForwarderConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn log_path(&self) -> &str {
        &self.log_path
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for ForwarderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_url_path("path", &self.path)?;
        validation::validate_path("log_path", &self.log_path)?;
        validation::validate_range(
            "connect_timeout_seconds",
            self.connect_timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_range(
            "request_timeout_seconds",
            self.request_timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}
