//! # plot 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/extract.rs` 的 `ResultArgs`

use super::extract::ResultArgs;

use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub result: ResultArgs,

    /// Column to plot (default depends on the result type)
    #[arg(short, long)]
    pub component: Option<String>,

    /// Output image; .svg gives SVG, anything else PNG
    #[arg(short, long, default_value = "result_plot.png")]
    pub output: PathBuf,
}
