//! # civil-mapi - MIDAS Civil NX 自动化接口命令行工具
//!
//! ## 子命令
//! - `analyze` - 打开模型并运行分析
//! - `save`    - 模型另存为
//! - `extract` - 提取结果表
//! - `plot`    - 绘制结果分布图
//! - `query`   - 查询模型数据
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑)
//!         └── civil_mapi (库：api, pre, loads, post, operations)
//! ```

mod cli;
mod commands;

use civil_mapi::utils::output;
use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::run(cli) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

/// `RUST_LOG` 优先，否则按 `-v` 次数提升日志级别
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
