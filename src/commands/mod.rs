//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。连接参数在这里解析为 `MidasConfig`，
//! 各子命令共用一个 `MidasCivil` 客户端。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `civil_mapi`
//! - 子模块: analyze, save, extract, plot, query

pub mod analyze;
pub mod extract;
pub mod plot;
pub mod query;
pub mod save;

use crate::cli::{Cli, Commands, ConnectionArgs};

use civil_mapi::{MidasCivil, MidasConfig, Result};
use std::time::Duration;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let civil = MidasCivil::new(build_config(&cli.connection)?)?;

    match cli.command {
        Commands::Analyze(args) => analyze::execute(&civil, args),
        Commands::Save(args) => save::execute(&civil, args),
        Commands::Extract(args) => extract::execute(&civil, args),
        Commands::Plot(args) => plot::execute(&civil, args),
        Commands::Query(args) => query::execute(&civil, args),
    }
}

/// 由命令行/环境变量构造连接配置
pub fn build_config(args: &ConnectionArgs) -> Result<MidasConfig> {
    let config = MidasConfig::resolve(
        args.base_url.as_deref(),
        Some(args.host.as_str()),
        args.port,
        args.api_key.as_deref(),
    )?
    .with_timeout(Duration::from_secs(args.timeout))
    .accept_invalid_certs(args.insecure);

    log::debug!("Using API at {}", config.base_url);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ConnectionArgs {
        ConnectionArgs {
            base_url: None,
            host: "localhost".into(),
            port: Some(10024),
            api_key: Some("k".into()),
            timeout: 60,
            insecure: true,
        }
    }

    #[test]
    fn test_build_config_from_host_and_port() {
        let config = build_config(&connection()).unwrap();
        assert_eq!(config.base_url, "https://localhost:10024/civil");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_build_config_without_port_or_url_fails() {
        let args = ConnectionArgs {
            port: None,
            ..connection()
        };
        assert!(build_config(&args).is_err());
    }
}
