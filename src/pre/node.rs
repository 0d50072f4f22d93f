//! # 节点
//!
//! `/db/NODE` 的查询、创建、更新和删除。
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`

use crate::api::MidasApi;
use crate::error::Result;

use serde_json::{json, Map, Value};

const ENDPOINT: &str = "/db/NODE";

/// 节点坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Node {
    pub fn new(id: u32, x: f64, y: f64, z: f64) -> Self {
        Node { id, x, y, z }
    }
}

/// 把节点列表组装成 `Assign` 请求体
pub fn nodes_to_json(nodes: &[Node]) -> Value {
    let entries: Map<String, Value> = nodes
        .iter()
        .map(|n| (n.id.to_string(), json!({ "X": n.x, "Y": n.y, "Z": n.z })))
        .collect();
    json!({ "Assign": entries })
}

/// 节点处理器
pub struct NodeProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> NodeProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    /// 以原始 JSON 创建节点
    pub fn create(&self, node_data: Value) -> Result<Value> {
        self.api.post(ENDPOINT, node_data)
    }

    pub fn create_nodes(&self, nodes: &[Node]) -> Result<Value> {
        log::info!("Creating {} nodes", nodes.len());
        self.create(nodes_to_json(nodes))
    }

    pub fn update(&self, node_data: Value) -> Result<Value> {
        self.api.put(ENDPOINT, node_data)
    }

    pub fn update_nodes(&self, nodes: &[Node]) -> Result<Value> {
        self.update(nodes_to_json(nodes))
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
    use crate::api::HttpMethod;

    #[test]
    fn test_create_nodes_payload() {
        let (api, rec) = recording_api();
        NodeProcessor::new(&api)
            .create_nodes(&[Node::new(1, 0.0, 0.0, 0.0), Node::new(2, 10.0, 0.0, 0.0)])
            .unwrap();

        let req = rec.last().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.body.unwrap(),
            json!({"Assign": {
                "1": {"X": 0.0, "Y": 0.0, "Z": 0.0},
                "2": {"X": 10.0, "Y": 0.0, "Z": 0.0}
            }})
        );
    }

    #[test]
    fn test_delete_single_path() {
        let (api, rec) = recording_api();
        NodeProcessor::new(&api).delete_single(12).unwrap();
        assert_eq!(rec.last_endpoint().unwrap(), "/db/NODE/12");
        assert_eq!(rec.last().unwrap().method, HttpMethod::Delete);
    }
}
