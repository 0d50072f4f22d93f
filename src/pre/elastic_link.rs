//! # 弹性连接
//!
//! `/db/ELNK`：两节点之间的一般、刚性和单向（仅受拉/仅受压）连接。
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`, `models/options.rs`

use super::assign;
use crate::api::MidasApi;
use crate::error::Result;
use crate::models::OneWayType;

use serde_json::{json, Value};

const ENDPOINT: &str = "/db/ELNK";

/// 一般弹性连接
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralLink {
    pub nodes: [u32; 2],
    /// 局部坐标系角度（度）
    pub angle: f64,
    /// 六个方向的约束状态，true 为约束
    pub rs: [bool; 6],
    /// 六个方向刚度
    pub sdr: [f64; 6],
    /// 是否考虑剪切变形
    pub shear: bool,
    /// 剪切弹簧位置比例
    pub dr: [f64; 2],
    pub group_name: String,
}

impl GeneralLink {
    pub fn new(start: u32, end: u32) -> Self {
        GeneralLink {
            nodes: [start, end],
            angle: 0.0,
            rs: [false; 6],
            sdr: [0.0; 6],
            shear: true,
            dr: [0.5, 0.5],
            group_name: String::new(),
        }
    }

    pub fn with_stiffness(mut self, sdr: [f64; 6]) -> Self {
        self.sdr = sdr;
        self
    }

    fn to_json(&self) -> Value {
        json!({
            "NODE": self.nodes,
            "LINK": "GEN",
            "ANGLE": self.angle,
            "R_S": self.rs,
            "SDR": self.sdr,
            "bSHEAR": self.shear,
            "DR": self.dr,
            "BNGR_NAME": self.group_name,
        })
    }
}

pub struct ElasticLinkProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> ElasticLinkProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    pub fn add_general_link(&self, link_id: u32, link: &GeneralLink) -> Result<Value> {
        log::info!("Adding general link {}", link_id);
        self.api.post(ENDPOINT, assign(link_id, link.to_json()))
    }

    pub fn add_rigid_link(
        &self,
        link_id: u32,
        nodes: [u32; 2],
        angle: f64,
        group_name: &str,
    ) -> Result<Value> {
        let data = json!({
            "NODE": nodes,
            "LINK": "RIGID",
            "ANGLE": angle,
            "BNGR_NAME": group_name,
        });
        log::info!("Adding rigid elastic link {}", link_id);
        self.api.post(ENDPOINT, assign(link_id, data))
    }

    /// 单向连接，刚度只取 `sdr[0]`
    pub fn add_nonlinear_link(
        &self,
        link_id: u32,
        nodes: [u32; 2],
        kind: OneWayType,
        angle: f64,
        sdr: [f64; 6],
        group_name: &str,
    ) -> Result<Value> {
        let data = json!({
            "NODE": nodes,
            "LINK": kind.as_str(),
            "ANGLE": angle,
            "SDR": sdr,
            "BNGR_NAME": group_name,
        });
        log::info!("Adding {} link {}", kind, link_id);
        self.api.post(ENDPOINT, assign(link_id, data))
    }

    pub fn update_link(&self, link_id: u32, data: Value) -> Result<Value> {
        self.api.put(ENDPOINT, assign(link_id, data))
    }

    pub fn delete_all(&self) -> Result<Value> {
        self.api.delete(ENDPOINT)
    }

    pub fn delete_single(&self, link_id: u32) -> Result<Value> {
        self.api.delete(&format!("{}/{}", ENDPOINT, link_id))
    }
}
