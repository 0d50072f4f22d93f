//! 测试用的记录型传输层：保存所有请求，按队列返回预设响应。

use super::transport::{ApiRequest, ApiResponse, Transport};
use super::{MidasApi, COMMAND_COMPLETE};
use crate::config::MidasConfig;
use crate::error::Result;

use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
pub struct Recorder {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<ApiResponse>>,
}

impl Recorder {
    /// 追加一个 200 响应
    pub fn respond(&self, body: Value) {
        self.respond_with(200, body);
    }

    pub fn respond_with(&self, status: u16, body: Value) {
        self.responses
            .borrow_mut()
            .push_back(ApiResponse { status, body });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// 最后一次请求的端点（去掉 base URL）
    pub fn last_endpoint(&self) -> Option<String> {
        self.last()
            .map(|r| r.url.trim_start_matches(BASE_URL).to_string())
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last().and_then(|r| r.body)
    }
}

struct RecordingTransport(Rc<Recorder>);

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.0.requests.borrow_mut().push(request.clone());
        let next = self.0.responses.borrow_mut().pop_front();
        Ok(next.unwrap_or(ApiResponse {
            status: 200,
            body: json!({ "message": COMMAND_COMPLETE }),
        }))
    }
}

const BASE_URL: &str = "https://localhost:10024/civil";

/// 创建一个使用记录型传输的客户端
pub fn recording_api() -> (MidasApi, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let api = MidasApi::with_transport(
        MidasConfig::new(BASE_URL, "test-key"),
        Box::new(RecordingTransport(Rc::clone(&recorder))),
    );
    (api, recorder)
}
