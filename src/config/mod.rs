pub mod forwarder_config;
pub mod local_log;

pub use forwarder_config::ForwarderConfig;
pub use local_log::AppendFileLog;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::ffi::OsString;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ioc-select")]
#[command(about = "Forward an SQL query to the IOC info service and print the result")]
pub struct CliArgs {
    /// SQL query text, sent verbatim as the SQLQUER parameter (any bytes)
    #[arg(allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub query: OsString,

    #[arg(short, long, help = "TOML file overriding host, path, log file and timeouts")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// 沒有指定設定檔時使用內建預設值
    pub fn load_config(&self) -> crate::Result<ForwarderConfig> {
        match &self.config {
            Some(path) => ForwarderConfig::from_file(path),
            None => Ok(ForwarderConfig::default()),
        }
    }
}
