//! # analyze 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use clap::Args;
use std::path::PathBuf;

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Model file (.mcb) to open before analysing
    #[arg(long, required_unless_present = "skip_open")]
    pub model: Option<PathBuf>,

    /// Application executable; when given it is launched first
    #[arg(long, env = "MIDAS_EXE")]
    pub exe: Option<PathBuf>,

    /// Seconds to wait after launching the application
    #[arg(long, default_value_t = 30)]
    pub wait: u64,

    /// Analyse the model that is already open
    #[arg(long, default_value_t = false)]
    pub skip_open: bool,

    /// Save the analysed model to this path
    #[arg(long)]
    pub save_as: Option<PathBuf>,
}
