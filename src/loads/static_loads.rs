//! # 静力荷载
//!
//! 荷载工况（`/db/STLD`）、自重（`/db/BODF`）和节点荷载（`/db/CNLD`）。
//!
//! ## 依赖关系
//! - 被 `loads/mod.rs` 导出
//! - 使用 `loads::LoadEndpoint`, `models/options.rs`

use super::LoadEndpoint;
use crate::api::MidasApi;
use crate::error::Result;
use crate::models::LoadCaseType;
use crate::pre::{assign, single_item, without_nulls};

use serde_json::{json, Value};

const LOAD_CASES: LoadEndpoint = LoadEndpoint::new("static load case", "/db/STLD");
const SELF_WEIGHT: LoadEndpoint = LoadEndpoint::new("self weight", "/db/BODF");
const NODAL_LOADS: LoadEndpoint = LoadEndpoint::new("nodal load", "/db/CNLD");

/// 自重默认所属的荷载工况
pub const DEFAULT_SELF_WEIGHT_CASE: &str = "自重";

/// 荷载工况的部分更新，`None` 字段不发送
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadCaseUpdate {
    pub name: Option<String>,
    pub case_type: Option<LoadCaseType>,
    /// 未提供时发送空字符串
    pub description: Option<String>,
}

/// 自重的部分更新
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfWeightUpdate {
    pub load_case: Option<String>,
    pub group_name: Option<String>,
    pub direction: Option<[f64; 3]>,
}

/// 节点集中力与集中力矩
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodalLoad {
    pub load_case: String,
    pub group_name: String,
    pub fx: f64,
    pub fy: f64,
    pub fz: f64,
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
}

impl NodalLoad {
    pub fn new(load_case: &str) -> Self {
        NodalLoad {
            load_case: load_case.to_string(),
            ..Default::default()
        }
    }

    fn item(&self) -> Value {
        let item = json!({
            "LCNAME": self.load_case,
            "GROUP_NAME": self.group_name,
            "FX": self.fx,
            "FY": self.fy,
            "FZ": self.fz,
            "MX": self.mx,
            "MY": self.my,
            "MZ": self.mz,
        });
        single_item(without_nulls(item))
    }
}

pub struct StaticLoadsProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> StaticLoadsProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    // ─── 荷载工况 ───

    pub fn query_load_cases(&self) -> Result<Value> {
        LOAD_CASES.query(self.api)
    }

    /// 添加荷载工况；描述为空时使用工况类型的默认描述
    pub fn add_load_case(
        &self,
        case_id: u32,
        name: &str,
        case_type: LoadCaseType,
        description: &str,
    ) -> Result<Value> {
        let desc = if description.is_empty() {
            case_type.default_description()
        } else {
            description
        };
        let data = json!({ "NAME": name, "TYPE": case_type.as_str(), "DESC": desc });
        LOAD_CASES.add(self.api, case_id, assign(case_id, data))
    }

    pub fn update_load_case(&self, case_id: u32, update: &LoadCaseUpdate) -> Result<Value> {
        let data = without_nulls(json!({
            "NAME": update.name,
            "TYPE": update.case_type.map(|t| t.as_str()),
            "DESC": update.description.as_deref().unwrap_or(""),
        }));
        LOAD_CASES.update(self.api, case_id, assign(case_id, Value::Object(data)))
    }

    pub fn delete_load_case(&self, case_id: u32) -> Result<Value> {
        LOAD_CASES.delete(self.api, case_id)
    }

    pub fn delete_all_load_cases(&self) -> Result<Value> {
        LOAD_CASES.delete_all(self.api)
    }

    // ─── 自重 ───

    pub fn query_self_weight(&self) -> Result<Value> {
        SELF_WEIGHT.query(self.api)
    }

    /// 添加自重；`direction` 缺省为 `[0, 0, -1]`
    pub fn add_self_weight(
        &self,
        case_id: u32,
        load_case: Option<&str>,
        group_name: &str,
        direction: Option<[f64; 3]>,
    ) -> Result<Value> {
        let data = json!({
            "LCNAME": load_case.unwrap_or(DEFAULT_SELF_WEIGHT_CASE),
            "GROUP_NAME": group_name,
            "FV": direction.unwrap_or([0.0, 0.0, -1.0]),
        });
        SELF_WEIGHT.add(self.api, case_id, assign(case_id, data))
    }

    pub fn update_self_weight(&self, case_id: u32, update: &SelfWeightUpdate) -> Result<Value> {
        let data = without_nulls(json!({
            "LCNAME": update.load_case,
            "GROUP_NAME": update.group_name,
            "FV": update.direction,
        }));
        SELF_WEIGHT.update(self.api, case_id, assign(case_id, Value::Object(data)))
    }

    pub fn delete_self_weight(&self, case_id: u32) -> Result<Value> {
        SELF_WEIGHT.delete(self.api, case_id)
    }

    pub fn delete_all_self_weights(&self) -> Result<Value> {
        SELF_WEIGHT.delete_all(self.api)
    }

    // ─── 节点荷载 ───

    pub fn query_nodal_loads(&self) -> Result<Value> {
        NODAL_LOADS.query(self.api)
    }

    pub fn add_nodal_load(&self, node_id: u32, load: &NodalLoad) -> Result<Value> {
        NODAL_LOADS.add(self.api, node_id, assign(node_id, load.item()))
    }

    /// 更新节点荷载；未给出的分量按 0 发送
    pub fn update_nodal_load(&self, node_id: u32, load: &NodalLoad) -> Result<Value> {
        NODAL_LOADS.update(self.api, node_id, assign(node_id, load.item()))
    }

    pub fn delete_nodal_load(&self, node_id: u32) -> Result<Value> {
        NODAL_LOADS.delete(self.api, node_id)
    }

    pub fn delete_all_nodal_loads(&self) -> Result<Value> {
        NODAL_LOADS.delete_all(self.api)
    }
}
