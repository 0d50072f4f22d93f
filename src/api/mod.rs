//! # 自动化接口访问模块
//!
//! 对本地 REST 自动化接口的同步请求封装。
//!
//! ## 子模块
//! - `transport`: 传输层抽象与基于 `reqwest` 的实现
//! - `client`: 统一请求入口 `MidasApi`
//!
//! ## 依赖关系
//! - 被 `pre/`, `loads/`, `post/`, `operations.rs` 使用
//! - 使用 `config.rs`

pub mod client;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::MidasApi;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, Transport};

/// 命令执行成功时接口返回的消息
pub const COMMAND_COMPLETE: &str = "MIDAS CIVIL NX command complete";
