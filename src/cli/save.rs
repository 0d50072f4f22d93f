//! # save 子命令 CLI 定义

use clap::Args;
use std::path::PathBuf;

/// save 子命令参数
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Target model path (.mcb)
    #[arg(short, long)]
    pub output: PathBuf,
}
