//! # 结果表
//!
//! 把 `{"<表名>": {"HEAD": [...], "DATA": [[...], ...]}}` 转为 [`ResultTable`]。
//! 数值列和编号列中无法解析的单元格记为 `Cell::Empty`。
//!
//! ## 依赖关系
//! - 被 `post/mod.rs`, `post/plot.rs`, `post/export.rs` 使用
//! - 使用 `post/kind.rs` 的 `ResultKind`

use super::kind::ResultKind;
use crate::error::{MidasError, Result};

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// 施工阶段列
pub const STAGE_COLUMN: &str = "Stage";

/// 结果表单元格
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
            Value::String(s) => Cell::Text(s.clone()),
            other => Cell::Text(other.to_string()),
        }
    }

    /// 转为数值，失败时为 `Empty`
    fn coerce(self) -> Self {
        match self {
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Cell::Number)
                .unwrap_or(Cell::Empty),
            other => other,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

/// 一张结果表
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub name: String,
    pub head: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// 从 `/post/table` 的响应中取出该结果类型的表，并转换数值列
    pub fn from_response(kind: ResultKind, response: &Value) -> Result<Self> {
        let spec = kind.spec();
        let mut table = Self::parse(spec.response_key, response)?;

        let numeric: Vec<usize> = table
            .head
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == spec.id_column || spec.numeric_columns.contains(&h.as_str()))
            .map(|(i, _)| i)
            .collect();

        for row in &mut table.rows {
            for &i in &numeric {
                let cell = std::mem::replace(&mut row[i], Cell::Empty);
                row[i] = cell.coerce();
            }
        }
        Ok(table)
    }

    /// 按原样解析表头和数据
    pub fn parse(key: &str, response: &Value) -> Result<Self> {
        let raw = response
            .get(key)
            .ok_or_else(|| MidasError::TableNotFound(key.to_string()))?;

        let malformed = |reason: String| MidasError::MalformedTable {
            table: key.to_string(),
            reason,
        };

        let head: Vec<String> = raw
            .get("HEAD")
            .and_then(Value::as_array)
            .ok_or_else(|| malformed("missing HEAD".into()))?
            .iter()
            .map(|h| h.as_str().map(str::to_string).unwrap_or_else(|| h.to_string()))
            .collect();

        let data = raw
            .get("DATA")
            .and_then(Value::as_array)
            .ok_or_else(|| malformed("missing DATA".into()))?;

        let mut rows = Vec::with_capacity(data.len());
        for (n, row) in data.iter().enumerate() {
            let cells = row
                .as_array()
                .ok_or_else(|| malformed(format!("row {} is not an array", n)))?;
            if cells.len() != head.len() {
                return Err(malformed(format!(
                    "row {} has {} cells, expected {}",
                    n,
                    cells.len(),
                    head.len()
                )));
            }
            rows.push(cells.iter().map(Cell::from_json).collect());
        }

        Ok(ResultTable {
            name: key.to_string(),
            head,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列位置（重名列取第一个）
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.head
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| MidasError::ColumnNotFound {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn column(&self, column: &str) -> Result<Vec<&Cell>> {
        let i = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| &row[i]).collect())
    }

    /// 数值列，空单元格为 `NaN`
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        Ok(self
            .column(column)?
            .into_iter()
            .map(|c| c.as_f64().unwrap_or(f64::NAN))
            .collect())
    }

    /// 按施工阶段拆分，按阶段名排序
    pub fn group_by_stage(&self) -> Result<Vec<(String, ResultTable)>> {
        let i = self.column_index(STAGE_COLUMN)?;
        let mut groups: BTreeMap<String, Vec<Vec<Cell>>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row[i].to_string()).or_default().push(row.clone());
        }
        Ok(groups
            .into_iter()
            .map(|(stage, rows)| {
                let table = ResultTable {
                    name: self.name.clone(),
                    head: self.head.clone(),
                    rows,
                };
                (stage, table)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn beam_force_response() -> Value {
        json!({"BeamForce": {
            "HEAD": ["Elem", "Load", "Stage", "Part", "Axial", "Moment-y"],
            "DATA": [
                ["1", "合计(CS)", "CS2", "I", "10.5", "-3.0"],
                ["1", "合计(CS)", "CS2", "J", "10.5", "4.0"],
                ["1", "合计(CS)", "CS1", "I", "9.0", "-"],
                ["1", "合计(CS)", "CS1", "J", 9.0, null]
            ]
        }})
    }

    #[test]
    fn test_numeric_coercion() {
        let table = ResultTable::from_response(ResultKind::BeamForce, &beam_force_response()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows[0][0], Cell::Number(1.0));
        assert_eq!(table.rows[0][1], Cell::Text("合计(CS)".into()));
        assert_eq!(table.rows[0][3], Cell::Text("I".into()));
        assert_eq!(table.rows[1][5], Cell::Number(4.0));
        assert_eq!(table.rows[2][5], Cell::Empty);
        assert_eq!(table.rows[3][4], Cell::Number(9.0));

        let moment = table.numeric_column("Moment-y").unwrap();
        assert_eq!(moment[0], -3.0);
        assert!(moment[2].is_nan());
    }

    #[test]
    fn test_group_by_stage_sorted_by_name() {
        let table = ResultTable::from_response(ResultKind::BeamForce, &beam_force_response()).unwrap();
        let groups = table.group_by_stage().unwrap();
        let names: Vec<&str> = groups.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, vec!["CS1", "CS2"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.rows[0][4], Cell::Number(10.5));
    }

    #[test]
    fn test_missing_table() {
        let err = ResultTable::from_response(ResultKind::Displacement, &json!({"BeamForce": {}}))
            .unwrap_err();
        assert!(matches!(err, MidasError::TableNotFound(ref k) if k == "Displacements(Global)"));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let response = json!({"TrussForce": {"HEAD": ["Elem", "Load"], "DATA": [["1"]]}});
        let err = ResultTable::from_response(ResultKind::TrussForce, &response).unwrap_err();
        assert!(matches!(err, MidasError::MalformedTable { .. }));
    }

    #[test]
    fn test_unknown_column() {
        let table = ResultTable::from_response(ResultKind::BeamForce, &beam_force_response()).unwrap();
        assert!(matches!(
            table.column("Torsion"),
            Err(MidasError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_general_table_has_no_stage_column() {
        let response = json!({"Displacements(Global)": {
            "HEAD": ["Node", "Load", "DZ"],
            "DATA": [["1", "comb1(CB)", "-1.2e-3"]]
        }});
        let table = ResultTable::from_response(ResultKind::Displacement, &response).unwrap();
        assert_eq!(table.rows[0][2], Cell::Number(-1.2e-3));
        assert!(table.group_by_stage().is_err());
    }
}
