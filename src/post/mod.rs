//! # 后处理模块
//!
//! 通过 `/post/table` 提取结果表，整理为 [`ResultTable`]，并导出或绘图。
//!
//! ## 子模块
//! - `kind`: 结果类型及请求体
//! - `table`: 结果表与数值转换、按阶段拆分
//! - `smoothing`: 绘图前的平滑
//! - `plot`: 分布图
//! - `export`: CSV / 终端表格
//!
//! ## 依赖关系
//! - 被 `lib.rs` 的 `MidasCivil` 和 `commands/` 使用
//! - 使用 `api/`, `models/`

pub mod export;
pub mod kind;
pub mod plot;
pub mod smoothing;
pub mod table;

pub use kind::{
    build_table_request, AnalysisMode, ResultKind, TableOptions, TableSpec,
    DEFAULT_CONSTRUCTION_LOAD_CASE, DEFAULT_GENERAL_LOAD_CASE,
};
pub use plot::Panel;
pub use smoothing::Smoothing;
pub use table::{Cell, ResultTable};

use crate::api::MidasApi;
use crate::error::Result;
use crate::models::Selection;

use serde_json::Value;

const ENDPOINT: &str = "/post/table";

/// 结果提取
pub struct PostProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> PostProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    /// 发送结果表请求；`load_case` 为 `None` 时使用分析类型的默认工况
    pub fn extract(
        &self,
        kind: ResultKind,
        selection: &Selection,
        load_case: Option<&str>,
        mode: &AnalysisMode,
        options: &TableOptions,
    ) -> Result<Value> {
        let load_case = load_case.unwrap_or_else(|| mode.default_load_case());
        log::info!("Extracting {} for load case {}", kind, load_case);
        let body = build_table_request(kind, selection, load_case, mode, options);
        self.api.post(ENDPOINT, body)
    }

    pub fn extract_general(
        &self,
        kind: ResultKind,
        selection: &Selection,
        load_case: Option<&str>,
        options: &TableOptions,
    ) -> Result<Value> {
        self.extract(kind, selection, load_case, &AnalysisMode::General, options)
    }

    pub fn extract_construction(
        &self,
        kind: ResultKind,
        selection: &Selection,
        load_case: Option<&str>,
        stages: &[String],
        options: &TableOptions,
    ) -> Result<Value> {
        let mode = AnalysisMode::Construction {
            stages: stages.to_vec(),
        };
        self.extract(kind, selection, load_case, &mode, options)
    }

    /// 提取并解析为结果表
    pub fn fetch_table(
        &self,
        kind: ResultKind,
        selection: &Selection,
        load_case: Option<&str>,
        mode: &AnalysisMode,
        options: &TableOptions,
    ) -> Result<ResultTable> {
        let raw = self.extract(kind, selection, load_case, mode, options)?;
        ResultTable::from_response(kind, &raw)
    }
}

/// 一般分析结果
pub fn process_general_results(kind: ResultKind, raw: &Value) -> Result<ResultTable> {
    ResultTable::from_response(kind, raw)
}

/// 施工阶段结果，按阶段名拆分
pub fn process_construction_results(
    kind: ResultKind,
    raw: &Value,
) -> Result<Vec<(String, ResultTable)>> {
    ResultTable::from_response(kind, raw)?.group_by_stage()
}
