//! # 节点/单元选择
//!
//! 结果表请求中的 `NODE_ELEMS` 字段，支持四种写法：
//! - 全部（空对象）
//! - 编号列表 `{"KEY": [101, 102]}`（桁架/索结果表使用 `KEYS`）
//! - 编号范围 `{"TO": "101 to 105"}`
//! - 结构组 `{"STRUCTURE_GROUP_NAME": "SG1"}`
//!
//! ## 依赖关系
//! - 被 `post/` 和 `cli/` 使用
//! - 使用 `regex` 识别范围写法

use crate::error::{MidasError, Result};

use regex::Regex;
use serde_json::{json, Map, Value};
use std::str::FromStr;
use std::sync::LazyLock;

/// 范围写法中独立的 `to`（不区分大小写）
static RANGE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bto\b").unwrap());

/// 编号列表使用的键名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKey {
    Key,
    Keys,
}

impl IdKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKey::Key => "KEY",
            IdKey::Keys => "KEYS",
        }
    }
}

/// 节点/单元选择方式
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Ids(Vec<u32>),
    Range(String),
    Group(String),
}

impl Selection {
    pub fn ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Selection::Ids(ids.into_iter().collect())
    }

    pub fn range(from: u32, to: u32) -> Self {
        Selection::Range(format!("{} to {}", from, to))
    }

    pub fn group(name: impl Into<String>) -> Self {
        Selection::Group(name.into())
    }

    /// 生成 `NODE_ELEMS` 字段
    pub fn to_json(&self, key: IdKey) -> Value {
        match self {
            Selection::All => Value::Object(Map::new()),
            Selection::Ids(ids) => json!({ key.as_str(): ids }),
            Selection::Range(range) => json!({ "TO": range.trim() }),
            Selection::Group(name) => json!({ "STRUCTURE_GROUP_NAME": name.trim() }),
        }
    }
}

impl FromStr for Selection {
    type Err = MidasError;

    /// 解析命令行写法：`1,2,3` / `101 to 105` / 结构组名 / `all`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MidasError::InvalidArgument("empty selection".into()));
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }

        if RANGE_WORD.is_match(s) {
            return Ok(Selection::Range(s.to_string()));
        }

        let looks_numeric = s
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace());
        if looks_numeric {
            let ids = s
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| {
                    p.parse::<u32>()
                        .map_err(|_| MidasError::InvalidArgument(format!("bad id '{}'", p)))
                })
                .collect::<Result<Vec<_>>>()?;
            return Ok(Selection::Ids(ids));
        }

        Ok(Selection::Group(s.to_string()))
    }
}
