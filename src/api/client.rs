//! # 统一请求入口
//!
//! `MidasApi` 负责拼接 URL、附加密钥、记录日志并检查状态码。
//! 所有前处理、荷载、后处理模块都通过它访问接口。
//!
//! ## 依赖关系
//! - 使用 `api/transport.rs`, `config.rs`
//! - 使用 `log` 记录请求

use super::transport::{ApiRequest, HttpMethod, HttpTransport, Transport};
use crate::config::MidasConfig;
use crate::error::{MidasError, Result};

use serde_json::Value;

/// 自动化接口客户端
pub struct MidasApi {
    config: MidasConfig,
    transport: Box<dyn Transport>,
}

impl MidasApi {
    /// 使用 HTTP 传输创建客户端
    pub fn new(config: MidasConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// 使用自定义传输层创建客户端
    pub fn with_transport(config: MidasConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &MidasConfig {
        &self.config
    }

    /// 发送请求并返回响应 JSON
    pub fn request(&self, method: HttpMethod, endpoint: &str, body: Option<Value>) -> Result<Value> {
        if let Some(ref payload) = body {
            log::debug!("{} {} payload: {}", method, endpoint, payload);
        }

        let request = ApiRequest {
            method,
            url: self.config.url(endpoint),
            api_key: self.config.api_key.clone(),
            body,
        };

        let response = self.transport.send(&request)?;
        log::info!("{} {} {}", method, endpoint, response.status);

        if !response.is_success() {
            let message = response
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| response.body.to_string());
            return Err(MidasError::Api {
                status: response.status,
                endpoint: endpoint.to_string(),
                message,
            });
        }

        Ok(response.body)
    }

    pub fn get(&self, endpoint: &str) -> Result<Value> {
        self.request(HttpMethod::Get, endpoint, None)
    }

    pub fn post(&self, endpoint: &str, body: Value) -> Result<Value> {
        self.request(HttpMethod::Post, endpoint, Some(body))
    }

    pub fn put(&self, endpoint: &str, body: Value) -> Result<Value> {
        self.request(HttpMethod::Put, endpoint, Some(body))
    }

    pub fn delete(&self, endpoint: &str) -> Result<Value> {
        self.request(HttpMethod::Delete, endpoint, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use serde_json::json;

    #[test]
    fn test_request_joins_url_and_key() {
        let (api, rec) = recording_api();
        api.put("/db/unit", json!({"Assign": {}})).unwrap();

        let req = rec.last().unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://localhost:10024/civil/db/unit");
        assert_eq!(req.api_key, "test-key");
        assert_eq!(req.body, Some(json!({"Assign": {}})));
    }

    #[test]
    fn test_get_and_delete_have_no_body() {
        let (api, rec) = recording_api();
        api.get("/db/NODE").unwrap();
        api.delete("/db/NODE/3").unwrap();

        let reqs = rec.requests();
        assert_eq!(reqs[0].body, None);
        assert_eq!(reqs[1].method, HttpMethod::Delete);
        assert!(reqs[1].url.ends_with("/db/NODE/3"));
        assert_eq!(reqs[1].body, None);
    }

    #[test]
    fn test_error_status_becomes_api_error() {
        let (api, rec) = recording_api();
        rec.respond_with(404, json!({"message": "no such table"}));

        match api.get("/db/XXXX") {
            Err(MidasError::Api {
                status,
                endpoint,
                message,
            }) => {
                assert_eq!(status, 404);
                assert_eq!(endpoint, "/db/XXXX");
                assert_eq!(message, "no such table");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
