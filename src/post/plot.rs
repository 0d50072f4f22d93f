//! # 结果分布图
//!
//! 使用 `plotters` 绘制结果分量沿单元/节点编号的分布。
//! 一般分析输出单张图；施工阶段结果每个阶段一张子图，上下排列。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `post/table.rs`, `post/smoothing.rs`
//! - 使用 `plotters` 渲染 PNG / SVG

use super::kind::ResultKind;
use super::table::ResultTable;
use crate::error::{MidasError, Result};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 每张子图的尺寸（像素）
pub const PANEL_WIDTH: u32 = 1000;
pub const PANEL_HEIGHT: u32 = 300;

/// 一张子图
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub points: Vec<(f64, f64)>,
}

/// 取出分量并按结果类型平滑
pub fn distribution(table: &ResultTable, kind: ResultKind, component: &str) -> Result<Vec<(f64, f64)>> {
    let spec = kind.spec();
    if spec.plot_component.is_none() {
        return Err(MidasError::NotPlottable(kind.to_string()));
    }
    let ids = table.numeric_column(spec.id_column)?;
    let values = table.numeric_column(component)?;
    Ok(spec
        .smoothing
        .apply(&ids, &values)
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect())
}

/// 一般分析结果的单张图
pub fn general_panel(table: &ResultTable, kind: ResultKind, component: &str) -> Result<Panel> {
    Ok(Panel {
        title: format!("{} distribution", component),
        points: distribution(table, kind, component)?,
    })
}

/// 施工阶段结果，每个阶段一张图
pub fn stage_panels(
    stages: &[(String, ResultTable)],
    kind: ResultKind,
    component: &str,
) -> Result<Vec<Panel>> {
    stages
        .iter()
        .map(|(stage, table)| {
            Ok(Panel {
                title: format!("Stage {} - {} distribution", stage, component),
                points: distribution(table, kind, component)?,
            })
        })
        .collect()
}

/// 渲染到文件；扩展名为 `.svg` 时输出 SVG，否则 PNG
pub fn render(panels: &[Panel], kind: ResultKind, component: &str, output_path: &Path) -> Result<()> {
    if panels.is_empty() {
        return Err(MidasError::Plot("nothing to plot".into()));
    }
    let size = (PANEL_WIDTH, PANEL_HEIGHT * panels.len() as u32);
    let x_desc = match kind.spec().id_column {
        "Node" => "Node",
        _ => "Element",
    };

    let use_svg = output_path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_panels(&root, panels, x_desc, component)?;
        root.present()
            .map_err(|e| MidasError::Plot(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_panels(&root, panels, x_desc, component)?;
        root.present()
            .map_err(|e| MidasError::Plot(e.to_string()))?;
    }
    log::info!("Plot written to {}", output_path.display());
    Ok(())
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
    x_desc: &str,
    y_desc: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MidasError::Plot(format!("{:?}", e)))?;

    let areas = root.split_evenly((panels.len(), 1));
    for (area, panel) in areas.iter().zip(panels) {
        draw_line_chart(area, panel, x_desc, y_desc)?;
    }
    Ok(())
}

fn draw_line_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    x_desc: &str,
    y_desc: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = axis_ranges(&panel.points);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 18).into_font())
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| MidasError::Plot(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 12))
        .y_label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 14))
        .draw()
        .map_err(|e| MidasError::Plot(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            panel.points.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| MidasError::Plot(format!("{:?}", e)))?;

    chart
        .draw_series(
            panel
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, line_color.filled())),
        )
        .map_err(|e| MidasError::Plot(format!("{:?}", e)))?;

    Ok(())
}

/// 坐标范围，留出 5% 边距；数据为空或为常数时给出一个非零区间
fn axis_ranges(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let padded = |min: f64, max: f64| {
        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        let span = max - min;
        let pad = if span.abs() < f64::EPSILON {
            min.abs().max(1.0) * 0.05
        } else {
            span * 0.05
        };
        (min - pad)..(max + pad)
    };

    let (x_min, x_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    let (y_min, y_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });

    (padded(x_min, x_max), padded(y_min, y_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stress_table() -> ResultTable {
        let response = json!({"BeamStress": {
            "HEAD": ["Elem", "Load", "Stage", "Part", "Bend(+y)"],
            "DATA": [
                ["1", "合计(CS)", "CS1", "I", "1.0"],
                ["1", "合计(CS)", "CS1", "J", "3.0"],
                ["2", "合计(CS)", "CS2", "I", "5.0"],
                ["2", "合计(CS)", "CS2", "J", "x"]
            ]
        }});
        ResultTable::from_response(ResultKind::BeamStress, &response).unwrap()
    }

    #[test]
    fn test_distribution_drops_missing_points() {
        let table = stress_table();
        let points = distribution(&table, ResultKind::BeamStress, "Bend(+y)").unwrap();
        // 第二对含空值，整点丢弃
        assert_eq!(points, vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_stage_titles() {
        let groups = stress_table().group_by_stage().unwrap();
        let panels = stage_panels(&groups, ResultKind::BeamStress, "Bend(+y)").unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].title, "Stage CS1 - Bend(+y) distribution");
    }

    #[test]
    fn test_cable_efficiency_not_plottable() {
        let table = ResultTable {
            name: "CableEfficiency".into(),
            head: vec!["Elem".into(), "Efficiency".into()],
            rows: vec![],
        };
        let err = distribution(&table, ResultKind::CableEfficiency, "Efficiency").unwrap_err();
        assert!(matches!(err, MidasError::NotPlottable(_)));
    }

    #[test]
    fn test_axis_ranges_constant_data() {
        let (x, y) = axis_ranges(&[(1.0, 5.0), (1.0, 5.0)]);
        assert!(x.start < 1.0 && x.end > 1.0);
        assert!(y.start < 5.0 && y.end > 5.0);
        let (x, _) = axis_ranges(&[]);
        assert_eq!(x, 0.0..1.0);
    }
}
