use crate::core::encoding;
use crate::core::{CapturedResponse, ConfigProvider, FailureLog, Query};
use crate::utils::error::{ForwardError, Result};
use reqwest::Client;
use std::io::Write;

/// 將查詢轉送到遠端 ioc_select 頁面並輸出回應
pub struct QueryForwarder<L: FailureLog, C: ConfigProvider> {
    log: L,
    config: C,
    client: Client,
}

impl<L: FailureLog, C: ConfigProvider> QueryForwarder<L, C> {
    pub fn new(log: L, config: C) -> Result<Self> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ForwardError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { log, config, client })
    }

    pub fn request_url(&self, query: &Query) -> String {
        format!(
            "{}{}",
            self.config.endpoint().trim_end_matches('/'),
            encoding::request_path(self.config.path(), query)
        )
    }

    /// Issues the request once and writes the body plus `\n` to `out`.
    ///
    /// On any fault the bytes read so far (possibly none) are appended to the
    /// failure log and the fault is returned. If that append fails too, the
    /// `LogWrite` error is returned instead.
    pub async fn forward<W: Write>(&self, query: &Query, out: &mut W) -> Result<CapturedResponse> {
        let mut captured = CapturedResponse::new();

        match self.fetch(query, &mut captured, out).await {
            Ok(()) => Ok(captured),
            Err(fault) => {
                tracing::debug!(
                    "Request faulted ({:?}): {}; {} byte(s) captured",
                    fault.kind(),
                    fault,
                    captured.len()
                );
                self.record_failure(&captured).await?;
                Err(fault)
            }
        }
    }

    async fn fetch<W: Write>(
        &self,
        query: &Query,
        captured: &mut CapturedResponse,
        out: &mut W,
    ) -> Result<()> {
        let url = self.request_url(query);
        tracing::debug!("Making request to: {}", url);

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ForwardError::from_send)?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            // 原本的行為：不論狀態碼都輸出 body
            tracing::warn!("Query service answered with status {}", status);
        }

        while let Some(chunk) = response.chunk().await.map_err(ForwardError::from_read)? {
            captured.extend(&chunk);
        }
        tracing::debug!("Read {} byte(s) of response body", captured.len());

        out.write_all(captured.as_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .and_then(|_| out.flush())
            .map_err(ForwardError::Output)
    }

    async fn record_failure(&self, captured: &CapturedResponse) -> Result<()> {
        if captured.is_empty() {
            tracing::warn!(
                "No response data was received; nothing appended to {}",
                self.log.location()
            );
        }

        match self.log.append(captured.as_bytes()).await {
            Ok(()) => {
                tracing::debug!(
                    "Appended {} byte(s) to failure log {}",
                    captured.len(),
                    self.log.location()
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ Failed to write failure log: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForwarderConfig;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLog {
        entries: Mutex<Vec<Vec<u8>>>,
    }

    impl FailureLog for MemoryLog {
        async fn append(&self, data: &[u8]) -> Result<()> {
            self.entries.lock().unwrap().push(data.to_vec());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_request_url_joins_endpoint_and_encoded_path() {
        let config = ForwarderConfig {
            endpoint: "http://pc3839.psi.ch/".to_string(),
            ..ForwarderConfig::default()
        };
        let forwarder = QueryForwarder::new(MemoryLog::default(), config).unwrap();

        assert_eq!(
            forwarder.request_url(&Query::from("select * from ioc")),
            "http://pc3839.psi.ch/testplan/IOC_INFOS/ioc_select.php?SQLQUER=select+%2A+from+ioc"
        );
    }

    #[tokio::test]
    async fn test_refused_connection_logs_empty_capture() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ForwarderConfig {
            endpoint: format!("http://{}", addr),
            ..ForwarderConfig::default()
        };
        let forwarder = QueryForwarder::new(MemoryLog::default(), config).unwrap();
        let mut out = Vec::new();

        let err = forwarder
            .forward(&Query::from("select 1"), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, ForwardError::Network(_)));
        assert!(out.is_empty());
        let entries = forwarder.log.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_empty());
    }
}
