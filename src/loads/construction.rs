//! # 施工阶段
//!
//! 目前只提供 `/db/STAG` 查询，以及从查询结果中读出阶段名称。

use crate::api::MidasApi;
use crate::error::Result;

use serde_json::Value;

const ENDPOINT: &str = "/db/STAG";

pub struct ConstructionStageProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> ConstructionStageProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    /// 按编号顺序列出阶段名称
    pub fn stage_names(&self) -> Result<Vec<String>> {
        Ok(stage_names(&self.query()?))
    }
}

/// 读取 `{"STAG": {"<id>": {"NAME": ...}}}` 中的阶段名称
pub fn stage_names(response: &Value) -> Vec<String> {
    let Some(stages) = response.get("STAG").and_then(Value::as_object) else {
        return Vec::new();
    };
    let mut named: Vec<(u64, String)> = stages
        .iter()
        .filter_map(|(id, stage)| {
            let name = stage.get("NAME")?.as_str()?;
            Some((id.parse().unwrap_or(u64::MAX), name.to_string()))
        })
        .collect();
    named.sort_by_key(|(id, _)| *id);
    named.into_iter().map(|(_, name)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use serde_json::json;

    #[test]
    fn test_query_stages() {
        let (api, rec) = recording_api();
        rec.respond(json!({"STAG": {
            "10": {"NAME": "CS10"},
            "2": {"NAME": "CS2"},
            "1": {"NAME": "CS1"}
        }}));

        let names = ConstructionStageProcessor::new(&api).stage_names().unwrap();
        assert_eq!(rec.last_endpoint().unwrap(), "/db/STAG");
        assert_eq!(names, vec!["CS1", "CS2", "CS10"]);
    }

    #[test]
    fn test_missing_table_gives_no_names() {
        assert!(stage_names(&json!({"message": "empty"})).is_empty());
    }
}
