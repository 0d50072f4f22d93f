//! # 程序操作
//!
//! 启动程序、打开模型、运行分析和另存模型。
//! `/doc/*` 命令的回复中 `message` 必须是完成标记，否则视为失败。
//!
//! ## 依赖关系
//! - 使用 `api/client.rs`
//! - 使用 `utils/progress.rs` 显示启动等待

use crate::api::{MidasApi, COMMAND_COMPLETE};
use crate::error::{MidasError, Result};
use crate::utils::progress;

use serde_json::{json, Value};
use std::path::Path;
use std::process::{Child, Command};
use std::time::Duration;

/// 程序启动后打开模型前的默认等待时间
pub const DEFAULT_STARTUP_WAIT: Duration = Duration::from_secs(30);

/// 启动程序（不等待其退出）
pub fn open_application(exe: &Path) -> Result<Child> {
    log::info!("Launching {}", exe.display());
    Command::new(exe).spawn().map_err(|e| MidasError::LaunchFailed {
        path: exe.display().to_string(),
        source: e,
    })
}

pub struct MidasOperations<'a> {
    api: &'a MidasApi,
}

impl<'a> MidasOperations<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    /// 启动程序，等待 `startup_wait` 后打开模型
    pub fn open_file(&self, exe: &Path, model: &Path, startup_wait: Duration) -> Result<Value> {
        open_application(exe)?;
        progress::wait_with_spinner(startup_wait, "Waiting for the application to start...");
        self.open_model(model)
    }

    /// 在已运行的程序中打开模型
    pub fn open_model(&self, model: &Path) -> Result<Value> {
        if !model.exists() {
            return Err(MidasError::FileNotFound {
                path: model.display().to_string(),
            });
        }
        log::info!("Opening model {}", model.display());
        let response = self
            .api
            .post("/doc/open", json!({ "Argument": model.display().to_string() }))?;
        ensure_complete("/doc/open", response)
    }

    pub fn analyze(&self) -> Result<Value> {
        let response = self.api.post("/doc/anal", json!({}))?;
        ensure_complete("/doc/anal", response)
    }

    pub fn save_as(&self, path: &Path) -> Result<Value> {
        log::info!("Saving model as {}", path.display());
        self.api
            .post("/doc/saveas", json!({ "Argument": path.display().to_string() }))
    }
}

fn ensure_complete(endpoint: &str, response: Value) -> Result<Value> {
    match response.get("message").and_then(Value::as_str) {
        Some(COMMAND_COMPLETE) => Ok(response),
        other => Err(MidasError::CommandFailed {
            endpoint: endpoint.to_string(),
            message: other.map(str::to_string).unwrap_or_else(|| response.to_string()),
        }),
    }
}
