//! # 荷载模块
//!
//! 荷载工况、自重、节点荷载、温度和预应力。每类荷载对应一个
//! `/db/...` 端点，增删改查的请求形式相同，由 [`LoadEndpoint`] 统一发送。
//!
//! ## 子模块
//! - `static_loads`: 荷载工况 / 自重 / 节点荷载
//! - `temperature`: 单元温度 / 温度梯度 / 系统温度
//! - `prestress`: 钢束预应力 / 梁预应力 / 初拉力
//! - `construction`: 施工阶段查询
//!
//! ## 依赖关系
//! - 使用 `api/`, `pre/` 中的请求体辅助函数

pub mod construction;
pub mod prestress;
pub mod static_loads;
pub mod temperature;

pub use construction::ConstructionStageProcessor;
pub use prestress::{
    BeamPrestress, BeamPrestressUpdate, InitialTensionUpdate, PrestressLoadsProcessor,
    TendonPrestress, TendonPrestressUpdate,
};
pub use static_loads::{
    LoadCaseUpdate, NodalLoad, SelfWeightUpdate, StaticLoadsProcessor,
};
pub use temperature::{
    BeamGradient, ElementTemperature, GradientTemperature, PlateGradient,
    SystemTemperatureUpdate, TemperatureLoadsProcessor,
};

use crate::api::MidasApi;
use crate::error::Result;

use serde_json::Value;
use std::fmt::Display;

/// 一个荷载端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadEndpoint {
    /// 日志中使用的名称
    pub label: &'static str,
    pub path: &'static str,
}

impl LoadEndpoint {
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        LoadEndpoint { label, path }
    }

    pub fn query(&self, api: &MidasApi) -> Result<Value> {
        log::debug!("Querying {}", self.label);
        api.get(self.path)
    }

    pub fn add(&self, api: &MidasApi, id: impl Display, body: Value) -> Result<Value> {
        log::info!("Adding {} for {}", self.label, id);
        api.post(self.path, body)
    }

    pub fn update(&self, api: &MidasApi, id: impl Display, body: Value) -> Result<Value> {
        log::info!("Updating {} for {}", self.label, id);
        api.put(self.path, body)
    }

    pub fn delete(&self, api: &MidasApi, id: impl Display) -> Result<Value> {
        log::info!("Deleting {} {}", self.label, id);
        api.delete(&format!("{}/{}", self.path, id))
    }

    pub fn delete_all(&self, api: &MidasApi) -> Result<Value> {
        log::info!("Deleting all {}", self.label);
        api.delete(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use crate::api::HttpMethod;
    use serde_json::json;

    const DEMO: LoadEndpoint = LoadEndpoint::new("demo load", "/db/DEMO");

    #[test]
    fn test_endpoint_verbs() {
        let (api, rec) = recording_api();

        DEMO.add(&api, 1, json!({"Assign": {}})).unwrap();
        assert_eq!(rec.last().unwrap().method, HttpMethod::Post);

        DEMO.update(&api, 1, json!({"Assign": {}})).unwrap();
        assert_eq!(rec.last().unwrap().method, HttpMethod::Put);

        DEMO.delete(&api, 3).unwrap();
        assert_eq!(rec.last_endpoint().unwrap(), "/db/DEMO/3");

        DEMO.delete_all(&api).unwrap();
        let req = rec.last().unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
        assert_eq!(rec.last_endpoint().unwrap(), "/db/DEMO");
    }
}
