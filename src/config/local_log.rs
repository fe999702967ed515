use crate::core::{ConfigProvider, FailureLog};
use crate::utils::error::{ForwardError, Result};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// 本機的失敗日誌：以附加模式寫入，不加時間戳或分隔符
#[derive(Debug, Clone)]
pub struct AppendFileLog {
    path: PathBuf,
}

impl AppendFileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.log_path())
    }

    fn write_error(&self, source: std::io::Error) -> ForwardError {
        ForwardError::LogWrite {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl FailureLog for AppendFileLog {
    async fn append(&self, data: &[u8]) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_error(e))?;

        file.write_all(data).await.map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
