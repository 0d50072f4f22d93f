//! # 连接配置
//!
//! 保存自动化接口的地址和密钥，程序启动时构造一次。
//!
//! ## 依赖关系
//! - 被 `api/client.rs` 使用
//! - 被 `commands/mod.rs` 从命令行参数构造

use crate::error::{MidasError, Result};

use std::time::Duration;

/// 默认请求超时（分析请求可能耗时较长）
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// 自动化接口连接配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidasConfig {
    /// 例如 `https://localhost:10024/civil`
    pub base_url: String,
    /// 随 `MAPI-Key` 请求头发送
    pub api_key: String,
    pub timeout: Duration,
    /// 本地服务使用自签名证书时需要开启
    pub accept_invalid_certs: bool,
}

impl MidasConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        MidasConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }

    /// 由主机名和端口构造，路径固定为 `/civil`
    pub fn from_host(host: &str, port: u16, api_key: impl Into<String>) -> Self {
        Self::new(format!("https://{}:{}/civil", host, port), api_key)
    }

    /// 按优先级解析：显式 URL > 主机+端口
    pub fn resolve(
        base_url: Option<&str>,
        host: Option<&str>,
        port: Option<u16>,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                MidasError::NotConfigured("API key missing (--api-key or MIDAS_API_KEY)".into())
            })?;

        match (base_url, host, port) {
            (Some(url), _, _) if !url.trim().is_empty() => Ok(Self::new(url.trim(), api_key)),
            (_, Some(host), Some(port)) => Ok(Self::from_host(host, port, api_key)),
            _ => Err(MidasError::NotConfigured(
                "base URL missing (--base-url, or --host with --port)".into(),
            )),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// 拼接完整请求 URL
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_builds_civil_url() {
        let cfg = MidasConfig::from_host("localhost", 10024, "key");
        assert_eq!(cfg.base_url, "https://localhost:10024/civil");
        assert_eq!(cfg.url("/db/NODE"), "https://localhost:10024/civil/db/NODE");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = MidasConfig::new("https://127.0.0.1:10024/civil/", "key");
        assert_eq!(cfg.url("/doc/anal"), "https://127.0.0.1:10024/civil/doc/anal");
    }

    #[test]
    fn test_resolve_prefers_explicit_url() {
        let cfg = MidasConfig::resolve(
            Some("https://a:1/civil"),
            Some("b"),
            Some(2),
            Some("k"),
        )
        .unwrap();
        assert_eq!(cfg.base_url, "https://a:1/civil");
    }

    #[test]
    fn test_resolve_requires_key_and_address() {
        assert!(MidasConfig::resolve(Some("https://a:1/civil"), None, None, None).is_err());
        assert!(MidasConfig::resolve(None, Some("localhost"), None, Some("k")).is_err());
        let cfg = MidasConfig::resolve(None, Some("localhost"), Some(10024), Some("k")).unwrap();
        assert_eq!(cfg.base_url, "https://localhost:10024/civil");
    }
}
