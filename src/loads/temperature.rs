//! # 温度荷载
//!
//! 单元温度（`/db/ETMP`）、温度梯度（`/db/GTMP`）和系统温度（`/db/STMP`）。
//! 单元温度和温度梯度的每个单元可带多条记录，编号从 1 开始。
//!
//! ## 依赖关系
//! - 被 `loads/mod.rs` 导出
//! - 使用 `loads::LoadEndpoint`

use super::LoadEndpoint;
use crate::api::MidasApi;
use crate::error::Result;
use crate::pre::{assign, without_nulls};

use serde_json::{json, Map, Value};

const ELEMENT_TEMPS: LoadEndpoint = LoadEndpoint::new("element temperature", "/db/ETMP");
const GRADIENT_TEMPS: LoadEndpoint = LoadEndpoint::new("temperature gradient", "/db/GTMP");
const SYSTEM_TEMPS: LoadEndpoint = LoadEndpoint::new("system temperature", "/db/STMP");

const BEAM_TYPE: u8 = 1;
const PLATE_TYPE: u8 = 2;

/// 单元温度记录
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTemperature {
    pub load_case: String,
    pub group_name: String,
    pub temp: f64,
}

impl ElementTemperature {
    pub fn new(load_case: &str, temp: f64) -> Self {
        ElementTemperature {
            load_case: load_case.to_string(),
            group_name: String::new(),
            temp,
        }
    }
}

/// 梁单元温度梯度；`hz`/`hy` 为 `None` 时使用截面高度
#[derive(Debug, Clone, PartialEq)]
pub struct BeamGradient {
    pub load_case: String,
    pub group_name: String,
    pub tz: f64,
    pub ty: f64,
    pub hz: Option<f64>,
    pub hy: Option<f64>,
}

impl BeamGradient {
    pub fn new(load_case: &str, tz: f64, ty: f64) -> Self {
        BeamGradient {
            load_case: load_case.to_string(),
            group_name: String::new(),
            tz,
            ty,
            hz: None,
            hy: None,
        }
    }
}

/// 板单元温度梯度
#[derive(Debug, Clone, PartialEq)]
pub struct PlateGradient {
    pub load_case: String,
    pub group_name: String,
    pub tz: f64,
    pub hz: Option<f64>,
}

impl PlateGradient {
    pub fn new(load_case: &str, tz: f64) -> Self {
        PlateGradient {
            load_case: load_case.to_string(),
            group_name: String::new(),
            tz,
            hz: None,
        }
    }
}

/// 一个单元的温度梯度记录
#[derive(Debug, Clone, PartialEq)]
pub enum GradientTemperature {
    Beam(Vec<BeamGradient>),
    Plate(Vec<PlateGradient>),
}

impl GradientTemperature {
    fn items(&self) -> Vec<Value> {
        match self {
            GradientTemperature::Beam(records) => numbered(records.iter().map(|r| {
                let mut item = Map::new();
                item.insert("LCNAME".into(), json!(r.load_case));
                item.insert("GROUP_NAME".into(), json!(r.group_name));
                item.insert("TYPE".into(), json!(BEAM_TYPE));
                item.insert("TZ".into(), json!(r.tz));
                item.insert("TY".into(), json!(r.ty));
                item.insert("USE_HZ".into(), json!(r.hz.is_none()));
                item.insert("USE_HY".into(), json!(r.hy.is_none()));
                if let Some(hz) = r.hz {
                    item.insert("HZ".into(), json!(hz));
                }
                if let Some(hy) = r.hy {
                    item.insert("HY".into(), json!(hy));
                }
                item
            })),
            GradientTemperature::Plate(records) => numbered(records.iter().map(|r| {
                let mut item = Map::new();
                item.insert("LCNAME".into(), json!(r.load_case));
                item.insert("GROUP_NAME".into(), json!(r.group_name));
                item.insert("TYPE".into(), json!(PLATE_TYPE));
                item.insert("TZ".into(), json!(r.tz));
                item.insert("USE_HZ".into(), json!(r.hz.is_none()));
                if let Some(hz) = r.hz {
                    item.insert("HZ".into(), json!(hz));
                }
                item
            })),
        }
    }
}

/// 系统温度的部分更新
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemTemperatureUpdate {
    pub temperature: Option<f64>,
    pub load_case: Option<String>,
    /// 未提供时发送空字符串
    pub group_name: Option<String>,
}

/// 给每条记录加上从 1 开始的 `ID`
fn numbered(items: impl Iterator<Item = Map<String, Value>>) -> Vec<Value> {
    items
        .enumerate()
        .map(|(i, mut item)| {
            item.insert("ID".into(), json!(i + 1));
            Value::Object(item)
        })
        .collect()
}

fn element_temp_items(temps: &[ElementTemperature]) -> Vec<Value> {
    numbered(temps.iter().map(|t| {
        let mut item = Map::new();
        item.insert("LCNAME".into(), json!(t.load_case));
        item.insert("GROUP_NAME".into(), json!(t.group_name));
        item.insert("TEMP".into(), json!(t.temp));
        item
    }))
}

pub struct TemperatureLoadsProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> TemperatureLoadsProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    // ─── 单元温度 ───

    pub fn query_element_temps(&self) -> Result<Value> {
        ELEMENT_TEMPS.query(self.api)
    }

    pub fn add_element_temp(&self, elem_id: u32, temps: &[ElementTemperature]) -> Result<Value> {
        let body = assign(elem_id, json!({ "ITEMS": element_temp_items(temps) }));
        ELEMENT_TEMPS.add(self.api, elem_id, body)
    }

    pub fn update_element_temp(&self, elem_id: u32, temps: &[ElementTemperature]) -> Result<Value> {
        let body = assign(elem_id, json!({ "ITEMS": element_temp_items(temps) }));
        ELEMENT_TEMPS.update(self.api, elem_id, body)
    }

    pub fn delete_element_temp(&self, elem_id: u32) -> Result<Value> {
        ELEMENT_TEMPS.delete(self.api, elem_id)
    }

    pub fn delete_all_element_temps(&self) -> Result<Value> {
        ELEMENT_TEMPS.delete_all(self.api)
    }

    // ─── 温度梯度 ───

    pub fn query_gradient_temps(&self) -> Result<Value> {
        GRADIENT_TEMPS.query(self.api)
    }

    pub fn add_beam_gradient_temp(&self, elem_id: u32, records: Vec<BeamGradient>) -> Result<Value> {
        self.add_gradient_temp(elem_id, &GradientTemperature::Beam(records))
    }

    pub fn add_plate_gradient_temp(
        &self,
        elem_id: u32,
        records: Vec<PlateGradient>,
    ) -> Result<Value> {
        self.add_gradient_temp(elem_id, &GradientTemperature::Plate(records))
    }

    pub fn add_gradient_temp(&self, elem_id: u32, gradient: &GradientTemperature) -> Result<Value> {
        let body = assign(elem_id, json!({ "ITEMS": gradient.items() }));
        GRADIENT_TEMPS.add(self.api, elem_id, body)
    }

    /// 按梁/板分别组装记录后覆盖写入
    pub fn update_gradient_temp(
        &self,
        elem_id: u32,
        gradient: &GradientTemperature,
    ) -> Result<Value> {
        let body = assign(elem_id, json!({ "ITEMS": gradient.items() }));
        GRADIENT_TEMPS.update(self.api, elem_id, body)
    }

    pub fn delete_gradient_temp(&self, elem_id: u32) -> Result<Value> {
        GRADIENT_TEMPS.delete(self.api, elem_id)
    }

    pub fn delete_all_gradient_temps(&self) -> Result<Value> {
        GRADIENT_TEMPS.delete_all(self.api)
    }

    // ─── 系统温度 ───

    pub fn query_system_temps(&self) -> Result<Value> {
        SYSTEM_TEMPS.query(self.api)
    }

    pub fn add_system_temp(
        &self,
        temp_id: u32,
        temperature: f64,
        load_case: &str,
        group_name: &str,
    ) -> Result<Value> {
        let data = json!({
            "TEMPER": temperature,
            "LCNAME": load_case,
            "GROUP_NAME": group_name,
        });
        SYSTEM_TEMPS.add(self.api, temp_id, assign(temp_id, data))
    }

    pub fn update_system_temp(
        &self,
        temp_id: u32,
        update: &SystemTemperatureUpdate,
    ) -> Result<Value> {
        let data = without_nulls(json!({
            "TEMPER": update.temperature,
            "LCNAME": update.load_case,
            "GROUP_NAME": update.group_name.as_deref().unwrap_or(""),
        }));
        SYSTEM_TEMPS.update(self.api, temp_id, assign(temp_id, Value::Object(data)))
    }

    pub fn delete_system_temp(&self, temp_id: u32) -> Result<Value> {
        SYSTEM_TEMPS.delete(self.api, temp_id)
    }

    pub fn delete_all_system_temps(&self) -> Result<Value> {
        SYSTEM_TEMPS.delete_all(self.api)
    }
}
