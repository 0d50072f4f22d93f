//! # extract 命令实现
//!
//! 解析结果请求参数，提取结果表，打印前若干行并可导出 CSV。
//! 施工阶段结果按阶段分别打印。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `civil_mapi::post`
//! - `ResultRequest` 被 `commands/plot.rs` 复用

use crate::cli::extract::{ExtractArgs, ResultArgs};

use civil_mapi::models::{DisplacementOption, NumberFormat, Selection};
use civil_mapi::post::{self, export, AnalysisMode, ResultKind, ResultTable, TableOptions};
use civil_mapi::utils::{output, progress};
use civil_mapi::{MidasCivil, Result};
use serde_json::Value;

/// 已校验的结果请求
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRequest {
    pub kind: ResultKind,
    pub selection: Selection,
    pub load_case: Option<String>,
    pub mode: AnalysisMode,
    pub options: TableOptions,
}

impl ResultRequest {
    /// 解析全部字符串选项，任何一个非法都不会发出请求
    pub fn from_args(args: &ResultArgs) -> Result<Self> {
        let kind: ResultKind = args.kind.parse()?;
        let selection: Selection = args.elements.parse()?;
        let format = args
            .format
            .as_deref()
            .map(str::parse::<NumberFormat>)
            .transpose()?;
        let disp_opt: DisplacementOption = args.disp_opt.parse()?;

        let mode = if args.construction || !args.stages.is_empty() {
            AnalysisMode::Construction {
                stages: args.stages.clone(),
            }
        } else {
            AnalysisMode::General
        };

        Ok(ResultRequest {
            kind,
            selection,
            load_case: args.load_case.clone(),
            mode,
            options: TableOptions {
                force_unit: args.force_unit.clone(),
                dist_unit: args.dist_unit.clone(),
                format,
                decimal_places: args.places,
                parts: (!args.parts.is_empty()).then(|| args.parts.clone()),
                disp_opt,
            },
        })
    }

    pub fn load_case(&self) -> &str {
        self.load_case
            .as_deref()
            .unwrap_or_else(|| self.mode.default_load_case())
    }

    /// 发送请求，返回原始回复
    pub fn send(&self, civil: &MidasCivil) -> Result<Value> {
        let pb = progress::create_spinner(&format!("Extracting {}...", self.kind));
        let result = civil.post().extract(
            self.kind,
            &self.selection,
            self.load_case.as_deref(),
            &self.mode,
            &self.options,
        );
        pb.finish_and_clear();
        result
    }
}

/// 执行结果提取
pub fn execute(civil: &MidasCivil, args: ExtractArgs) -> Result<()> {
    let request = ResultRequest::from_args(&args.result)?;
    output::print_header(&format!("Extracting {} ({})", request.kind, request.load_case()));

    let raw = request.send(civil)?;
    if args.raw {
        output::print_json(&raw);
        return Ok(());
    }

    let table = post::process_general_results(request.kind, &raw)?;
    output::print_info(&format!("{} rows in table '{}'", table.len(), table.name));

    if table.is_empty() {
        output::print_warning("The reply contains no rows.");
    } else if request.mode.is_construction() {
        for (stage, stage_table) in table.group_by_stage()? {
            output::print_separator();
            output::print_info(&format!("Stage {} ({} rows)", stage, stage_table.len()));
            print_rows(&stage_table, args.rows);
        }
    } else {
        print_rows(&table, args.rows);
    }

    if let Some(path) = &args.csv {
        export::to_csv(&table, path)?;
        output::print_written("csv", &path.display().to_string());
    }

    Ok(())
}

fn print_rows(table: &ResultTable, max_rows: usize) {
    println!("{}", export::render_table(table, max_rows));
    if table.len() > max_rows {
        output::print_info(&format!(
            "Showing {} of {} rows (use --rows or --csv for more)",
            max_rows,
            table.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civil_mapi::MidasError;

    fn args(kind: &str) -> ResultArgs {
        ResultArgs {
            kind: kind.into(),
            elements: "all".into(),
            load_case: None,
            construction: false,
            stages: vec![],
            force_unit: None,
            dist_unit: None,
            format: None,
            places: None,
            parts: vec![],
            disp_opt: "Accumulative".into(),
        }
    }

    #[test]
    fn test_general_request_defaults() {
        let request = ResultRequest::from_args(&args("beam_force")).unwrap();
        assert_eq!(request.kind, ResultKind::BeamForce);
        assert_eq!(request.selection, Selection::All);
        assert_eq!(request.mode, AnalysisMode::General);
        assert_eq!(request.load_case(), "comb1(CB)");
        assert_eq!(request.options.parts, None);
    }

    #[test]
    fn test_stages_imply_construction() {
        let mut a = args("displacement");
        a.stages = vec!["CS1".into(), "CS2".into()];
        a.elements = "101 to 105".into();
        a.disp_opt = "current".into();
        let request = ResultRequest::from_args(&a).unwrap();
        assert!(request.mode.is_construction());
        assert_eq!(request.load_case(), "合计(CS)");
        assert_eq!(request.selection, Selection::Range("101 to 105".into()));
        assert_eq!(request.options.disp_opt, DisplacementOption::Current);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = ResultRequest::from_args(&args("plate_force")).unwrap_err();
        assert!(matches!(err, MidasError::InvalidOption { .. }));

        let mut a = args("truss_force");
        a.format = Some("Engineering".into());
        assert!(ResultRequest::from_args(&a).is_err());
    }
}
