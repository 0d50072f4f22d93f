//! # 统一错误处理模块
//!
//! 定义 civil-mapi 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// civil-mapi 统一错误类型
#[derive(Error, Debug)]
pub enum MidasError {
    // ─────────────────────────────────────────────────────────────
    // 传输错误
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Connection is not configured: {0}")]
    NotConfigured(String),

    // ─────────────────────────────────────────────────────────────
    // API 响应错误
    // ─────────────────────────────────────────────────────────────
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("Command '{endpoint}' did not complete: {message}")]
    CommandFailed { endpoint: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // 参数校验错误（在发送请求之前产生）
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported {kind} '{value}'. Supported: {expected}")]
    InvalidOption {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No staged constraint for node {0}, nothing to update")]
    ConstraintNotStaged(String),

    // ─────────────────────────────────────────────────────────────
    // 结果表错误
    // ─────────────────────────────────────────────────────────────
    #[error("Table '{0}' not found in the response")]
    TableNotFound(String),

    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    #[error("Malformed result table '{table}': {reason}")]
    MalformedTable { table: String, reason: String },

    #[error("Result type '{0}' cannot be plotted")]
    NotPlottable(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch '{path}'")]
    LaunchFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl MidasError {
    /// 构造枚举选项校验错误
    pub fn invalid_option(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        MidasError::InvalidOption {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MidasError>;
