//! # 预应力
//!
//! 钢束预应力和索初拉力写入 `/db/TDPL`，梁单元预应力写入 `/db/PRST`。
//! 更新操作只发送调用方给出的字段，`GROUP_NAME` 缺省为空字符串。
//!
//! ## 依赖关系
//! - 被 `loads/mod.rs` 导出
//! - 使用 `loads::LoadEndpoint`, `models/options.rs`

use super::LoadEndpoint;
use crate::api::MidasApi;
use crate::error::Result;
use crate::models::{BeamPrestressDir, PrestressType, TensionOrder};
use crate::pre::{assign, single_item, without_nulls};

use serde_json::{json, Value};

const TENDON_LOADS: LoadEndpoint = LoadEndpoint::new("tendon prestress", "/db/TDPL");
const BEAM_PRESTRESS: LoadEndpoint = LoadEndpoint::new("beam prestress", "/db/PRST");
const INITIAL_TENSION: LoadEndpoint = LoadEndpoint::new("initial tension", "/db/TDPL");

/// 钢束预应力
#[derive(Debug, Clone, PartialEq)]
pub struct TendonPrestress {
    pub tendon_name: String,
    pub load_case: String,
    pub begin: f64,
    /// 缺省与 `begin` 相同
    pub end: Option<f64>,
    pub group_name: String,
    pub kind: PrestressType,
    pub order: TensionOrder,
    pub grouting_stage: u32,
}

impl TendonPrestress {
    pub fn new(tendon_name: &str, load_case: &str, begin: f64) -> Self {
        TendonPrestress {
            tendon_name: tendon_name.to_string(),
            load_case: load_case.to_string(),
            begin,
            end: None,
            group_name: String::new(),
            kind: PrestressType::Stress,
            order: TensionOrder::Both,
            grouting_stage: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TendonPrestressUpdate {
    pub tendon_name: Option<String>,
    pub load_case: Option<String>,
    pub begin: Option<f64>,
    pub end: Option<f64>,
    pub group_name: Option<String>,
    pub kind: Option<PrestressType>,
    pub order: Option<TensionOrder>,
    pub grouting_stage: Option<u32>,
}

/// 梁单元预应力（偏心距按 i 端 / 跨中 / j 端给出）
#[derive(Debug, Clone, PartialEq)]
pub struct BeamPrestress {
    pub load_case: String,
    pub tension: f64,
    pub distance_i: f64,
    pub distance_m: f64,
    pub distance_j: f64,
    pub group_name: String,
    pub direction: BeamPrestressDir,
}

impl BeamPrestress {
    pub fn new(load_case: &str, tension: f64, distances: [f64; 3]) -> Self {
        BeamPrestress {
            load_case: load_case.to_string(),
            tension,
            distance_i: distances[0],
            distance_m: distances[1],
            distance_j: distances[2],
            group_name: String::new(),
            direction: BeamPrestressDir::Z,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeamPrestressUpdate {
    pub load_case: Option<String>,
    pub tension: Option<f64>,
    pub distance_i: Option<f64>,
    pub distance_m: Option<f64>,
    pub distance_j: Option<f64>,
    pub group_name: Option<String>,
    pub direction: Option<BeamPrestressDir>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialTensionUpdate {
    pub load_case: Option<String>,
    pub tension: Option<f64>,
    pub group_name: Option<String>,
}

pub struct PrestressLoadsProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> PrestressLoadsProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        TENDON_LOADS.query(self.api)
    }

    pub fn query_beam_prestress(&self) -> Result<Value> {
        BEAM_PRESTRESS.query(self.api)
    }

    // ─── 钢束 ───

    pub fn add_tendon_prestress(&self, tendon_id: u32, load: &TendonPrestress) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": load.load_case,
            "GROUP_NAME": load.group_name,
            "TENDON_NAME": load.tendon_name,
            "TYPE": load.kind.as_str(),
            "ORDER": load.order.as_str(),
            "BEGIN": load.begin,
            "END": load.end.unwrap_or(load.begin),
            "GROUTING": load.grouting_stage,
        }));
        TENDON_LOADS.add(self.api, tendon_id, assign(tendon_id, single_item(item)))
    }

    pub fn update_tendon_prestress(
        &self,
        tendon_id: u32,
        update: &TendonPrestressUpdate,
    ) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": update.load_case,
            "GROUP_NAME": update.group_name.as_deref().unwrap_or(""),
            "TENDON_NAME": update.tendon_name,
            "TYPE": update.kind.map(|k| k.as_str()),
            "ORDER": update.order.map(|o| o.as_str()),
            "BEGIN": update.begin,
            "END": update.end,
            "GROUTING": update.grouting_stage,
        }));
        TENDON_LOADS.update(self.api, tendon_id, assign(tendon_id, single_item(item)))
    }

    pub fn delete_tendon_prestress(&self, tendon_id: u32) -> Result<Value> {
        TENDON_LOADS.delete(self.api, tendon_id)
    }

    pub fn delete_all_tendon_prestress(&self) -> Result<Value> {
        TENDON_LOADS.delete_all(self.api)
    }

    // ─── 梁单元 ───

    pub fn add_beam_prestress(&self, elem_id: u32, load: &BeamPrestress) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": load.load_case,
            "GROUP_NAME": load.group_name,
            "DIR": load.direction.code(),
            "TENSION": load.tension,
            "DISTANCE_I": load.distance_i,
            "DISTANCE_M": load.distance_m,
            "DISTANCE_J": load.distance_j,
        }));
        BEAM_PRESTRESS.add(self.api, elem_id, assign(elem_id, single_item(item)))
    }

    pub fn update_beam_prestress(&self, elem_id: u32, update: &BeamPrestressUpdate) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": update.load_case,
            "GROUP_NAME": update.group_name.as_deref().unwrap_or(""),
            "DIR": update.direction.map(|d| d.code()),
            "TENSION": update.tension,
            "DISTANCE_I": update.distance_i,
            "DISTANCE_M": update.distance_m,
            "DISTANCE_J": update.distance_j,
        }));
        BEAM_PRESTRESS.update(self.api, elem_id, assign(elem_id, single_item(item)))
    }

    pub fn delete_beam_prestress(&self, elem_id: u32) -> Result<Value> {
        BEAM_PRESTRESS.delete(self.api, elem_id)
    }

    pub fn delete_all_beam_prestress(&self) -> Result<Value> {
        BEAM_PRESTRESS.delete_all(self.api)
    }

    // ─── 初拉力 ───

    pub fn add_initial_tension(
        &self,
        elem_id: u32,
        load_case: &str,
        tension: f64,
        group_name: &str,
    ) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": load_case,
            "GROUP_NAME": group_name,
            "TENSION": tension,
        }));
        INITIAL_TENSION.add(self.api, elem_id, assign(elem_id, single_item(item)))
    }

    pub fn update_initial_tension(
        &self,
        elem_id: u32,
        update: &InitialTensionUpdate,
    ) -> Result<Value> {
        let item = without_nulls(json!({
            "LCNAME": update.load_case,
            "GROUP_NAME": update.group_name.as_deref().unwrap_or(""),
            "TENSION": update.tension,
        }));
        INITIAL_TENSION.update(self.api, elem_id, assign(elem_id, single_item(item)))
    }
}
