//! # 节点弹性支撑
//!
//! `/db/NSPR`：线性弹簧，以及仅受压/仅受拉的非线性弹簧。
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`, `models/options.rs`

use super::{assign, single_item};
use crate::api::MidasApi;
use crate::error::{MidasError, Result};
use crate::models::OneWayType;

use serde_json::{json, Map, Value};

const ENDPOINT: &str = "/db/NSPR";

/// 线性弹性支撑
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearSpring {
    /// 六个方向是否固定
    pub fixed: [bool; 6],
    /// 六个方向刚度
    pub stiffness: [f64; 6],
    pub damping: bool,
    /// 阻尼系数
    pub cr: [f64; 6],
    pub group_name: String,
}

impl LinearSpring {
    pub fn with_stiffness(stiffness: [f64; 6]) -> Self {
        LinearSpring {
            stiffness,
            ..Default::default()
        }
    }

    fn item(&self) -> Value {
        let mut item = Map::new();
        item.insert("TYPE".into(), json!("LINEAR"));
        item.insert("F_S".into(), json!(self.fixed));
        item.insert("SDR".into(), json!(self.stiffness));
        item.insert("DAMPING".into(), json!(self.damping));
        item.insert("Cr".into(), json!(self.cr));
        item.insert("GROUP_NAME".into(), json!(self.group_name));
        single_item(item)
    }
}

/// 非线性（单向）弹性支撑
#[derive(Debug, Clone, PartialEq)]
pub struct NonlinearSpring {
    pub kind: OneWayType,
    /// 0~5 依次为 Dx(+) Dx(-) Dy(+) Dy(-) Dz(+) Dz(-)，6 为自定义向量
    pub direction: u8,
    pub stiffness: f64,
    pub vector: [f64; 3],
    pub group_name: String,
}

impl NonlinearSpring {
    pub fn new(kind: OneWayType, direction: u8, stiffness: f64) -> Self {
        NonlinearSpring {
            kind,
            direction,
            stiffness,
            vector: [0.0; 3],
            group_name: String::new(),
        }
    }

    fn item(&self) -> Result<Value> {
        if self.direction > 6 {
            return Err(MidasError::InvalidArgument(format!(
                "spring direction must be 0..=6, got {}",
                self.direction
            )));
        }
        let mut item = Map::new();
        item.insert("TYPE".into(), json!(self.kind.as_str()));
        item.insert("GROUP_NAME".into(), json!(self.group_name));
        item.insert("DIR".into(), json!(self.direction));
        item.insert("DV".into(), json!(self.vector));
        item.insert("STIFF".into(), json!(self.stiffness));
        Ok(single_item(item))
    }
}

/// 节点弹性支撑处理器
pub struct PointSpringProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> PointSpringProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    pub fn add_linear_spring(&self, node_id: u32, spring: &LinearSpring) -> Result<Value> {
        log::info!("Adding linear spring on node {}", node_id);
        self.api.post(ENDPOINT, assign(node_id, spring.item()))
    }

    pub fn add_nonlinear_spring(&self, node_id: u32, spring: &NonlinearSpring) -> Result<Value> {
        let body = assign(node_id, spring.item()?);
        log::info!("Adding {} spring on node {}", spring.kind, node_id);
        self.api.post(ENDPOINT, body)
    }

    /// 以原始数据覆盖节点的弹性支撑
    pub fn update(&self, node_id: u32, spring_data: Value) -> Result<Value> {
        self.api.put(ENDPOINT, assign(node_id, spring_data))
    }

    pub fn delete_all(&self) -> Result<Value> {
        self.api.delete(ENDPOINT)
    }

    pub fn delete_single(&self, node_id: u32) -> Result<Value> {
        self.api.delete(&format!("{}/{}", ENDPOINT, node_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;

    #[test]
    fn test_linear_spring_payload() {
        let (api, rec) = recording_api();
        let spring = LinearSpring {
            fixed: [false, false, false, true, true, true],
            ..LinearSpring::with_stiffness([1000.0, 1200.0, 1400.0, 0.0, 0.0, 0.0])
        };
        PointSpringProcessor::new(&api)
            .add_linear_spring(5, &spring)
            .unwrap();

        assert_eq!(rec.last_endpoint().unwrap(), "/db/NSPR");
        let item = rec.last_body().unwrap()["Assign"]["5"]["ITEMS"][0].clone();
        assert_eq!(item["ID"], 1);
        assert_eq!(item["TYPE"], "LINEAR");
        assert_eq!(item["F_S"], json!([false, false, false, true, true, true]));
        assert_eq!(item["SDR"], json!([1000.0, 1200.0, 1400.0, 0.0, 0.0, 0.0]));
        assert_eq!(item["Cr"], json!([0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(item["DAMPING"], false);
    }

    #[test]
    fn test_nonlinear_spring_payload() {
        let (api, rec) = recording_api();
        PointSpringProcessor::new(&api)
            .add_nonlinear_spring(6, &NonlinearSpring::new(OneWayType::Compression, 4, 200.0))
            .unwrap();

        let item = rec.last_body().unwrap()["Assign"]["6"]["ITEMS"][0].clone();
        assert_eq!(item["TYPE"], "COMP");
        assert_eq!(item["DIR"], 4);
        assert_eq!(item["DV"], json!([0.0, 0.0, 0.0]));
        assert_eq!(item["STIFF"], 200.0);
    }

    #[test]
    fn test_bad_direction_sends_nothing() {
        let (api, rec) = recording_api();
        let spring = NonlinearSpring::new(OneWayType::Tension, 7, 1.0);
        assert!(PointSpringProcessor::new(&api)
            .add_nonlinear_spring(6, &spring)
            .is_err());
        assert_eq!(rec.count(), 0);
    }
}
