//! # 结果导出
//!
//! 结果表写入 CSV，或以表格形式打印到终端。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `csv` 写文件，`tabled` 打印表格

use super::table::ResultTable;
use crate::error::{MidasError, Result};

use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

/// 导出为 CSV（表头 + 全部行）
pub fn to_csv(table: &ResultTable, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(&table.head)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|c| c.to_string()))?;
    }
    wtr.flush().map_err(|e| MidasError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    log::info!("{} rows written to {}", table.len(), output_path.display());
    Ok(())
}

/// 渲染前 `max_rows` 行
pub fn render_table(table: &ResultTable, max_rows: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.head.iter().cloned());
    for row in table.rows.iter().take(max_rows) {
        builder.push_record(row.iter().map(|c| c.to_string()));
    }
    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::table::Cell;
    use tempfile::tempdir;

    fn sample() -> ResultTable {
        ResultTable {
            name: "TrussForce".into(),
            head: vec!["Elem".into(), "Load".into(), "Force-I".into()],
            rows: vec![
                vec![Cell::Number(33.0), Cell::Text("comb1(CB)".into()), Cell::Number(-12.5)],
                vec![Cell::Number(34.0), Cell::Text("comb1(CB)".into()), Cell::Empty],
            ],
        }
    }

    #[test]
    fn test_csv_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truss.csv");
        to_csv(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Elem,Load,Force-I");
        assert_eq!(lines[1], "33,comb1(CB),-12.5");
        assert_eq!(lines[2], "34,comb1(CB),");
    }

    #[test]
    fn test_render_limits_rows() {
        let text = render_table(&sample(), 1);
        assert!(text.contains("Force-I"));
        assert!(text.contains("-12.5"));
        assert!(!text.contains("34"));
    }

    #[test]
    fn test_csv_to_missing_directory_fails() {
        let err = to_csv(&sample(), Path::new("/no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, MidasError::CsvError(_)));
    }
}
