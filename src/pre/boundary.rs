//! # 一般支撑
//!
//! 约束条件先在本地暂存，`apply` 时以一次 PUT 写入 `/db/cons`。
//! 删除操作直接作用于模型，并同步移除本地暂存项。
//!
//! 约束字符串共 7 位，从左到右为 DX DY DZ RX RY RZ RW，1 表示约束。
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`

use super::{check_dof_string, single_item};
use crate::api::MidasApi;
use crate::error::{MidasError, Result};

use serde_json::{json, Map, Value};

const ENDPOINT: &str = "/db/cons";

/// 节点支撑（七个自由度）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Support {
    pub dx: bool,
    pub dy: bool,
    pub dz: bool,
    pub rx: bool,
    pub ry: bool,
    pub rz: bool,
    pub rw: bool,
}

impl Support {
    /// 三个平动自由度固定
    pub fn pinned() -> Self {
        Support {
            dx: true,
            dy: true,
            dz: true,
            ..Default::default()
        }
    }

    /// 除翘曲外全部固定
    pub fn fixed() -> Self {
        Support {
            rx: true,
            ry: true,
            rz: true,
            ..Self::pinned()
        }
    }

    /// 转为约束字符串，例如 `1110000`
    pub fn constraint_string(&self) -> String {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz, self.rw]
            .iter()
            .map(|&fixed| if fixed { '1' } else { '0' })
            .collect()
    }
}

/// 一般支撑处理器
pub struct SupportProcessor<'a> {
    api: &'a MidasApi,
    staged: Map<String, Value>,
}

impl<'a> SupportProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self {
            api,
            staged: Map::new(),
        }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    /// 暂存一个节点的约束（不发送请求）
    pub fn add_constraint(&mut self, node_id: u32, constraint: &str, group_name: &str) -> Result<()> {
        check_dof_string(constraint, 7, "constraint")?;
        self.staged
            .insert(node_id.to_string(), constraint_entry(constraint, group_name));
        log::info!("Staged constraint {} on node {}", constraint, node_id);
        Ok(())
    }

    /// 修改已暂存的约束；节点没有暂存项时报错
    pub fn update_constraint(
        &mut self,
        node_id: u32,
        constraint: &str,
        group_name: &str,
    ) -> Result<()> {
        check_dof_string(constraint, 7, "constraint")?;
        let key = node_id.to_string();
        match self.staged.get_mut(&key) {
            Some(entry) => {
                *entry = constraint_entry(constraint, group_name);
                Ok(())
            }
            None => Err(MidasError::ConstraintNotStaged(key)),
        }
    }

    pub fn add_support(&mut self, node_id: u32, support: Support) -> Result<()> {
        self.add_constraint(node_id, &support.constraint_string(), "")
    }

    pub fn update_support(&mut self, node_id: u32, support: Support) -> Result<()> {
        self.update_constraint(node_id, &support.constraint_string(), "")
    }

    /// 本地暂存的请求体
    pub fn staged(&self) -> Value {
        json!({ "Assign": self.staged })
    }

    pub fn staged_count(&self) -> usize {
        self.staged.len()
    }

    /// 把暂存的约束写入模型
    pub fn apply(&self) -> Result<Value> {
        log::info!("Applying {} staged constraints", self.staged.len());
        self.api.put(ENDPOINT, self.staged())
    }

    /// 删除模型中所有支撑，并清空本地暂存
    pub fn delete_all(&mut self) -> Result<Value> {
        let response = self.api.delete(ENDPOINT)?;
        self.staged.clear();
        Ok(response)
    }

    /// 删除单个节点的支撑，并移除本地暂存项
    pub fn delete_single(&mut self, node_id: u32) -> Result<Value> {
        let response = self.api.delete(&format!("{}/{}", ENDPOINT, node_id))?;
        self.staged.remove(&node_id.to_string());
        Ok(response)
    }
}

fn constraint_entry(constraint: &str, group_name: &str) -> Value {
    let mut item = Map::new();
    item.insert("GROUP_NAME".into(), json!(group_name));
    item.insert("CONSTRAINT".into(), json!(constraint));
    single_item(item)
}
