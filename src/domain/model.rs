use crate::core::encoding;
use std::ffi::OsString;

/// 轉送給遠端的 SQL 查詢，以原始位元組保存，不解析也不驗證內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(Vec<u8>);

impl Query {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lossy text form, for log messages only.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// `SQLQUER` 參數值（空白編為 `+`）
    pub fn encoded(&self) -> String {
        encoding::quote_plus_bytes(&self.0)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<OsString> for Query {
    #[cfg(unix)]
    fn from(arg: OsString) -> Self {
        use std::os::unix::ffi::OsStringExt;
        Self(arg.into_vec())
    }

    // 非 unix 平台的命令列參數不是位元組序列
    #[cfg(not(unix))]
    fn from(arg: OsString) -> Self {
        Self(arg.to_string_lossy().into_owned().into_bytes())
    }
}

/// 到目前為止已讀到的回應內容。請求開始前即為空，失敗時照樣寫入日誌。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedResponse {
    bytes: Vec<u8>,
}

impl CapturedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
