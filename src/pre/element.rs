//! # 单元
//!
//! 梁、桁架和索单元共用 `/db/ELEM`，区别只在 `TYPE` 字段和索单元的附加参数。
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`, `models/options.rs`

use super::assign;
use crate::api::MidasApi;
use crate::error::{MidasError, Result};
use crate::models::ElementKind;

use serde_json::{json, Value};

const ENDPOINT: &str = "/db/ELEM";

/// 索单元附加参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableOptions {
    pub stype: u8,
    /// 1/2: 按初拉力，3: 按无应力长度
    pub cable_type: u8,
    pub unstressed_length: f64,
    pub tension: f64,
}

impl Default for CableOptions {
    fn default() -> Self {
        CableOptions {
            stype: 3,
            cable_type: 3,
            unstressed_length: 1.0,
            tension: 0.0,
        }
    }
}

/// 单元定义
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    pub id: u32,
    pub material: u32,
    pub section: u32,
    pub nodes: Vec<u32>,
    pub angle: f64,
    pub cable: CableOptions,
}

impl ElementSpec {
    pub fn new(id: u32, material: u32, section: u32, nodes: Vec<u32>) -> Self {
        ElementSpec {
            id,
            material,
            section,
            nodes,
            angle: 0.0,
            cable: CableOptions::default(),
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_cable(mut self, cable: CableOptions) -> Self {
        self.cable = cable;
        self
    }
}

/// 单元处理器
pub struct ElementProcessor<'a> {
    api: &'a MidasApi,
    kind: ElementKind,
}

impl<'a> ElementProcessor<'a> {
    pub fn new(api: &'a MidasApi, kind: ElementKind) -> Self {
        Self { api, kind }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    /// 创建单元（接口使用 PUT 写入）
    pub fn create(&self, spec: &ElementSpec) -> Result<Value> {
        let body = self.element_json(spec)?;
        log::info!("Writing {} element {}", self.kind, spec.id);
        self.api.put(ENDPOINT, body)
    }

    pub fn update(&self, spec: &ElementSpec) -> Result<Value> {
        self.create(spec)
    }

    pub fn delete_all(&self) -> Result<Value> {
        self.api.delete(ENDPOINT)
    }

    pub fn delete_single(&self, element_id: u32) -> Result<Value> {
        self.api.delete(&format!("{}/{}", ENDPOINT, element_id))
    }

    fn element_json(&self, spec: &ElementSpec) -> Result<Value> {
        let mut data = json!({
            "TYPE": self.kind.as_str(),
            "MATL": spec.material,
            "SECT": spec.section,
            "NODE": spec.nodes,
            "ANGLE": spec.angle,
        });

        if self.kind == ElementKind::Cable {
            let cable = &spec.cable;
            data["STYPE"] = json!(cable.stype);
            data["CABLE"] = json!(cable.cable_type);
            match cable.cable_type {
                3 => data["NON_LEN"] = json!(cable.unstressed_length),
                1 | 2 => data["TENS"] = json!(cable.tension),
                other => {
                    return Err(MidasError::invalid_option(
                        "cable type",
                        &other.to_string(),
                        &["1", "2", "3"],
                    ))
                }
            }
        }

        Ok(assign(spec.id, data))
    }
}
