//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `analyze`: 打开模型并运行分析
//! - `save`: 模型另存为
//! - `extract`: 提取结果表（终端表格 / CSV）
//! - `plot`: 绘制结果分布图
//! - `query`: 查询模型数据（JSON）
//!
//! 连接参数为全局参数，可由环境变量提供。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, save, extract, plot, query

pub mod analyze;
pub mod extract;
pub mod plot;
pub mod query;
pub mod save;

use clap::{Args, Parser, Subcommand};

/// civil-mapi - MIDAS Civil NX 自动化接口命令行工具
#[derive(Parser)]
#[command(name = "civil-mapi")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Drive MIDAS Civil NX through its local automation API", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Verbose logging (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 连接参数
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Full API base URL, e.g. https://localhost:10024/civil
    #[arg(long, global = true, env = "MIDAS_BASE_URL")]
    pub base_url: Option<String>,

    /// API host (used with --port when --base-url is not given)
    #[arg(long, global = true, env = "MIDAS_HOST", default_value = "localhost")]
    pub host: String,

    /// API port
    #[arg(long, global = true, env = "MIDAS_PORT")]
    pub port: Option<u16>,

    /// MAPI-Key issued by the application
    #[arg(long, global = true, env = "MIDAS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = civil_mapi::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Accept self-signed certificates of the local server
    #[arg(long, global = true, default_value_t = false)]
    pub insecure: bool,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Open a model (optionally launching the application) and run the analysis
    Analyze(analyze::AnalyzeArgs),

    /// Save the current model under a new path
    Save(save::SaveArgs),

    /// Extract a result table and print it or write it to CSV
    Extract(extract::ExtractArgs),

    /// Plot the distribution of a result component
    Plot(plot::PlotArgs),

    /// Query model data and print the JSON reply
    Query(query::QueryArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_connection_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "civil-mapi",
            "save",
            "--output",
            "out.mcb",
            "--port",
            "10024",
            "--api-key",
            "k",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.connection.port, Some(10024));
        assert_eq!(cli.connection.api_key.as_deref(), Some("k"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Save(_)));
    }
}
