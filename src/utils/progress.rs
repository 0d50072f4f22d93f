//! # 进度提示
//!
//! 封装 `indicatif`，为启动等待、分析和结果提取提供统一的 spinner 样式。
//!
//! ## 依赖关系
//! - 被 `operations.rs`, `commands/` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// 创建 spinner（用于不确定进度的任务）
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 显示 spinner 并阻塞等待指定时长
pub fn wait_with_spinner(duration: Duration, message: &str) {
    if duration.is_zero() {
        return;
    }
    let pb = create_spinner(message);
    thread::sleep(duration);
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_wait_returns_immediately() {
        let start = std::time::Instant::now();
        wait_with_spinner(Duration::ZERO, "waiting");
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
