//! # plot 命令实现
//!
//! 提取结果表后绘制分量分布图。一般分析输出单张图，
//! 施工阶段结果每个阶段一张子图。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `commands/extract.rs` 的 `ResultRequest`
//! - 使用 `civil_mapi::post::plot`

use super::extract::ResultRequest;
use crate::cli::plot::PlotArgs;

use civil_mapi::post::{self, plot, ResultKind};
use civil_mapi::utils::output;
use civil_mapi::{MidasCivil, MidasError, Result};

/// 执行绘图
pub fn execute(civil: &MidasCivil, args: PlotArgs) -> Result<()> {
    let request = ResultRequest::from_args(&args.result)?;
    let component = resolve_component(request.kind, args.component.as_deref())?;
    output::print_header(&format!("Plotting {} ({})", component, request.kind));

    let raw = request.send(civil)?;
    let table = post::process_general_results(request.kind, &raw)?;

    let panels = if request.mode.is_construction() {
        let stages = table.group_by_stage()?;
        output::print_info(&format!("{} stages in reply", stages.len()));
        plot::stage_panels(&stages, request.kind, &component)?
    } else {
        vec![plot::general_panel(&table, request.kind, &component)?]
    };

    plot::render(&panels, request.kind, &component, &args.output)?;
    output::print_written("plot", &args.output.display().to_string());
    Ok(())
}

/// 未指定分量时使用结果类型的默认分量
fn resolve_component(kind: ResultKind, requested: Option<&str>) -> Result<String> {
    match (requested, kind.spec().plot_component) {
        (_, None) => Err(MidasError::NotPlottable(kind.to_string())),
        (Some(c), Some(_)) => Ok(c.to_string()),
        (None, Some(default)) => Ok(default.to_string()),
    }
}
