//! # 前处理模块
//!
//! 把节点、单元、边界条件等模型数据组装成 `Assign` 请求体并发送。
//!
//! ## 子模块
//! - `model`: 单位与材料
//! - `node`: 节点
//! - `element`: 梁/桁架/索单元
//! - `boundary`: 一般支撑（本地暂存后统一提交）
//! - `spring`: 节点弹性支撑
//! - `rigid_link`: 刚性连接
//! - `elastic_link`: 弹性连接
//!
//! ## 依赖关系
//! - 被 `lib.rs` 的 `MidasCivil` 使用
//! - 使用 `api/`, `models/`

pub mod boundary;
pub mod elastic_link;
pub mod element;
pub mod model;
pub mod node;
pub mod rigid_link;
pub mod spring;

pub use boundary::{Support, SupportProcessor};
pub use elastic_link::{ElasticLinkProcessor, GeneralLink};
pub use element::{CableOptions, ElementProcessor, ElementSpec};
pub use model::{Material, ModelSettings};
pub use node::{Node, NodeProcessor};
pub use rigid_link::RigidLinkProcessor;
pub use spring::{LinearSpring, NonlinearSpring, PointSpringProcessor};

use serde_json::{json, Map, Value};
use std::fmt::Display;

/// `{"Assign": {"<id>": data}}`
pub(crate) fn assign(id: impl Display, data: Value) -> Value {
    let mut entries = Map::new();
    entries.insert(id.to_string(), data);
    json!({ "Assign": entries })
}

/// `{"ITEMS": [item]}`，条目编号固定为 1
pub(crate) fn single_item(mut item: Map<String, Value>) -> Value {
    item.insert("ID".into(), json!(1));
    json!({ "ITEMS": [Value::Object(item)] })
}

/// 去掉值为 `null` 的键（部分更新时只发送提供的字段）
pub(crate) fn without_nulls(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        _ => Map::new(),
    }
}

/// 检查由 0/1 组成、长度固定的自由度字符串
pub(crate) fn check_dof_string(dof: &str, len: usize, what: &str) -> crate::Result<()> {
    if dof.len() == len && dof.chars().all(|c| c == '0' || c == '1') {
        Ok(())
    } else {
        Err(crate::MidasError::InvalidArgument(format!(
            "{} must be {} characters of 0/1, got '{}'",
            what, len, dof
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_shape() {
        assert_eq!(
            assign(7, json!({"X": 1.0})),
            json!({"Assign": {"7": {"X": 1.0}}})
        );
    }

    #[test]
    fn test_single_item_sets_id() {
        let item = without_nulls(json!({"LCNAME": "DL", "TENSION": null}));
        assert_eq!(
            single_item(item),
            json!({"ITEMS": [{"ID": 1, "LCNAME": "DL"}]})
        );
    }

    #[test]
    fn test_check_dof_string() {
        assert!(check_dof_string("1110000", 7, "constraint").is_ok());
        assert!(check_dof_string("111000", 7, "constraint").is_err());
        assert!(check_dof_string("11100x0", 7, "constraint").is_err());
    }
}
