//! # analyze 命令实现
//!
//! 打开模型（可选先启动程序），运行分析，可选另存。
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `civil_mapi::operations`

use crate::cli::analyze::AnalyzeArgs;

use civil_mapi::utils::{output, progress};
use civil_mapi::{MidasCivil, Result};
use std::time::Duration;

/// 执行分析
pub fn execute(civil: &MidasCivil, args: AnalyzeArgs) -> Result<()> {
    output::print_header("Running Analysis");
    let ops = civil.operations();

    match (&args.model, args.skip_open) {
        (Some(model), false) => {
            match &args.exe {
                Some(exe) => {
                    output::print_info(&format!("Launching {}", exe.display()));
                    ops.open_file(exe, model, Duration::from_secs(args.wait))?;
                }
                None => {
                    ops.open_model(model)?;
                }
            }
            output::print_success(&format!("Opened {}", model.display()));
        }
        _ => output::print_skip("Using the model that is already open"),
    }

    let pb = progress::create_spinner("Analysing...");
    let result = ops.analyze();
    pb.finish_and_clear();
    result?;
    output::print_success("Analysis complete");

    if let Some(path) = &args.save_as {
        ops.save_as(path)?;
        output::print_written("model", &path.display().to_string());
    }

    output::print_done("Finished");
    Ok(())
}
