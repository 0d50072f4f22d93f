//! # 工具函数模块
//!
//! 提供终端输出样式和等待进度提示。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `operations.rs` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
