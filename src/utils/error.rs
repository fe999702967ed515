use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Network request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Malformed or interrupted response: {0}")]
    Protocol(#[source] reqwest::Error),

    #[error("Failed to write response to output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Failed to append to failure log {path}: {source}")]
    LogWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤種類，供呼叫端區分故障來源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Network,
    Protocol,
    Output,
    LogWrite,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ForwardError {
    /// 將 `send()` 階段的錯誤分類：連線、DNS、逾時屬於網路錯誤
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ForwardError::Network(err)
        } else {
            ForwardError::Protocol(err)
        }
    }

    /// 讀取 body 途中的錯誤，除逾時外都視為協定錯誤
    pub fn from_read(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ForwardError::Network(err)
        } else {
            ForwardError::Protocol(err)
        }
    }

    pub fn kind(&self) -> FaultKind {
        match self {
            ForwardError::Network(_) => FaultKind::Network,
            ForwardError::Protocol(_) => FaultKind::Protocol,
            ForwardError::Output(_) => FaultKind::Output,
            ForwardError::LogWrite { .. } => FaultKind::LogWrite,
            ForwardError::Io(_)
            | ForwardError::ConfigError { .. }
            | ForwardError::InvalidConfigValueError { .. } => FaultKind::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            FaultKind::Network | FaultKind::Protocol => ErrorSeverity::Medium,
            FaultKind::Output | FaultKind::Configuration => ErrorSeverity::High,
            FaultKind::LogWrite => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定行程退出碼；任何錯誤都不會以 0 結束
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            FaultKind::Network => "Check that the query host is reachable and try again",
            FaultKind::Protocol => {
                "The server closed or corrupted the response; partial data was saved to the failure log"
            }
            FaultKind::Output => "Check that standard output is writable (e.g. a closed pipe)",
            FaultKind::LogWrite => "Check permissions and free space for the failure log path",
            FaultKind::Configuration => "Fix the configuration file or command-line arguments",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ForwardError::Network(_) => "Could not reach the query service".to_string(),
            ForwardError::Protocol(_) => "The query service returned an incomplete response".to_string(),
            ForwardError::Output(_) => "Could not print the query result".to_string(),
            ForwardError::LogWrite { path, .. } => {
                format!("Query failed and the failure log {} could not be written", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ForwardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_write_is_critical() {
        let err = ForwardError::LogWrite {
            path: "/tmp/x.log".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), FaultKind::LogWrite);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("/tmp/x.log"));
    }

    #[test]
    fn test_config_errors_map_to_configuration_kind() {
        let err = ForwardError::InvalidConfigValueError {
            field: "path".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.kind(), FaultKind::Configuration);
        assert_eq!(err.exit_code(), 1);

        let io = ForwardError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(matches!(io, ForwardError::Io(_)));
        assert_eq!(io.kind(), FaultKind::Configuration);
    }

    #[test]
    fn test_every_fault_exits_non_zero() {
        let faults = [
            ForwardError::Output(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe")),
            ForwardError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing")),
            ForwardError::ConfigError {
                message: "bad".to_string(),
            },
            ForwardError::LogWrite {
                path: "/tmp/x.log".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        ];

        for fault in faults {
            assert_ne!(fault.exit_code(), 0, "{:?}", fault);
        }
    }

    #[test]
    fn test_output_error_exit_code() {
        let err = ForwardError::Output(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(err.kind(), FaultKind::Output);
        assert_eq!(err.exit_code(), 1);
    }
}
