//! # 结果类型
//!
//! 每种结果表的固定参数：表名、列、默认单位和精度、选择键、绘图分量与平滑方式。
//! 请求体由 [`build_table_request`] 组装。
//!
//! ## 依赖关系
//! - 被 `post/mod.rs`, `cli/` 使用
//! - 使用 `models/` 的 `Selection`, `NumberFormat`, `DisplacementOption`

use super::smoothing::Smoothing;
use crate::error::{MidasError, Result};
use crate::models::{DisplacementOption, IdKey, NumberFormat, Selection};

use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// 一般分析的默认荷载工况
pub const DEFAULT_GENERAL_LOAD_CASE: &str = "comb1(CB)";
/// 施工阶段分析的默认荷载工况
pub const DEFAULT_CONSTRUCTION_LOAD_CASE: &str = "合计(CS)";

/// 结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    BeamForce,
    BeamStress,
    BeamStress7Dof,
    TrussForce,
    TrussStress,
    CableForce,
    CableEfficiency,
    CableConfig,
    Displacement,
}

/// 一种结果表的固定参数
#[derive(Debug)]
pub struct TableSpec {
    pub table_name: &'static str,
    pub table_type: &'static str,
    /// 响应中结果表所在的键
    pub response_key: &'static str,
    /// 单元号或节点号列
    pub id_column: &'static str,
    pub id_key: IdKey,
    pub general_columns: &'static [&'static str],
    pub construction_columns: &'static [&'static str],
    pub numeric_columns: &'static [&'static str],
    pub force_unit: &'static str,
    pub dist_unit: &'static str,
    pub format: NumberFormat,
    pub general_places: u32,
    pub construction_places: u32,
    /// 是否发送 `PARTS`（仅梁单元）
    pub sends_parts: bool,
    /// 默认绘图分量；`None` 表示该结果不绘图
    pub plot_component: Option<&'static str>,
    pub smoothing: Smoothing,
}

const BEAM_FORCE_NUMERIC: &[&str] = &[
    "Axial", "Shear-y", "Shear-z", "Torsion", "Moment-y", "Moment-z", "Bi-Moment", "T-Moment",
    "W-Moment",
];

const BEAM_STRESS_NUMERIC: &[&str] = &[
    "Axial", "Shear-y", "Shear-z", "Bend(+y)", "Bend(-y)", "Bend(+z)", "Bend(-z)", "Cb(min/max)",
    "Cb1(-y+z)", "Cb2(+y+z)", "Cb3(+y-z)", "Cb4(-y-z)",
];

const BEAM_STRESS_GENERAL: &[&str] = &[
    "Elem", "Load", "Part", "Axial", "Shear-y", "Shear-z", "Bend(+y)", "Bend(-y)", "Bend(+z)",
    "Bend(-z)", "Cb(min/max)", "Cb1(-y+z)", "Cb2(+y+z)", "Cb3(+y-z)", "Cb4(-y-z)",
];

const BEAM_STRESS_CONSTRUCTION: &[&str] = &[
    "Elem", "Load", "Stage", "Step", "Part", "Axial", "Shear-y", "Shear-z", "Bend(+y)",
    "Bend(-y)", "Bend(+z)", "Bend(-z)", "Cb(min/max)", "Cb1(-y+z)", "Cb2(+y+z)", "Cb3(+y-z)",
    "Cb4(-y-z)",
];

static BEAM_FORCE: TableSpec = TableSpec {
    table_name: "BeamForce",
    table_type: "BEAMFORCE",
    response_key: "BeamForce",
    id_column: "Elem",
    id_key: IdKey::Key,
    general_columns: &[
        "Elem", "Load", "Part", "Axial", "Shear-y", "Shear-z", "Torsion", "Moment-y", "Moment-z",
        "Bi-Moment", "T-Moment", "W-Moment",
    ],
    construction_columns: &[
        "Elem", "Load", "Stage", "Step", "Part", "Axial", "Shear-y", "Shear-z", "Torsion",
        "Moment-y", "Moment-z", "Bi-Moment", "T-Moment", "W-Moment",
    ],
    numeric_columns: BEAM_FORCE_NUMERIC,
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 6,
    sends_parts: true,
    plot_component: Some("Moment-y"),
    smoothing: Smoothing::Nodal,
};

const BEAM_STRESS_BASE: TableSpec = TableSpec {
    table_name: "BeamStress",
    table_type: "BEAMSTRESS",
    response_key: "BeamStress",
    id_column: "Elem",
    id_key: IdKey::Key,
    general_columns: BEAM_STRESS_GENERAL,
    construction_columns: BEAM_STRESS_CONSTRUCTION,
    numeric_columns: BEAM_STRESS_NUMERIC,
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 6,
    sends_parts: true,
    plot_component: Some("Bend(+y)"),
    smoothing: Smoothing::Pairwise,
};

static BEAM_STRESS: TableSpec = BEAM_STRESS_BASE;

// 7 自由度应力与普通梁应力只差表名和响应键
static BEAM_STRESS_7DOF: TableSpec = TableSpec {
    table_name: "BeamStress(7DOF)",
    table_type: "BEAMSTRESS7DOF",
    response_key: "BeamStress(7thDOF)",
    ..BEAM_STRESS_BASE
};

static TRUSS_FORCE: TableSpec = TableSpec {
    table_name: "TrussForce",
    table_type: "TRUSSFORCE",
    response_key: "TrussForce",
    id_column: "Elem",
    id_key: IdKey::Keys,
    general_columns: &["Elem", "Load", "Force-I", "Force-J"],
    construction_columns: &["Elem", "Load", "Stage", "Step", "Force-I", "Force-J"],
    numeric_columns: &["Force-I", "Force-J"],
    force_unit: "kN",
    dist_unit: "m",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 12,
    sends_parts: false,
    plot_component: Some("Force-I"),
    smoothing: Smoothing::Raw,
};

static TRUSS_STRESS: TableSpec = TableSpec {
    table_name: "TrussStress",
    table_type: "TRUSSSTRESS",
    response_key: "TrussStress",
    id_column: "Elem",
    id_key: IdKey::Keys,
    general_columns: &["Elem", "Load", "Stress-I", "Stress-J"],
    construction_columns: &["Elem", "Load", "Stage", "Step", "Stress-I", "Stress-J"],
    numeric_columns: &["Stress-I", "Stress-J"],
    force_unit: "kN",
    dist_unit: "m",
    format: NumberFormat::Fixed,
    general_places: 12,
    construction_places: 12,
    sends_parts: false,
    plot_component: Some("Stress-I"),
    smoothing: Smoothing::Raw,
};

// 接口返回的索内力表中 Tension/FX/FY/FZ 各出现两次（I 端与 J 端）
static CABLE_FORCE: TableSpec = TableSpec {
    table_name: "CableForce",
    table_type: "CABLEFORCE",
    response_key: "CableForce",
    id_column: "Elem",
    id_key: IdKey::Keys,
    general_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Step", "Tension", "FX", "FY", "FZ", "Tension", "FX",
        "FY", "FZ",
    ],
    construction_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Stage", "Step", "Tension", "FX", "FY", "FZ", "Tension",
        "FX", "FY", "FZ",
    ],
    numeric_columns: &["Tension", "FX", "FY", "FZ"],
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 6,
    sends_parts: false,
    plot_component: Some("Tension"),
    smoothing: Smoothing::Raw,
};

static CABLE_EFFICIENCY: TableSpec = TableSpec {
    table_name: "CableEfficiency",
    table_type: "CABLEEFFIENCY",
    response_key: "CableEfficiency",
    id_column: "Elem",
    id_key: IdKey::Keys,
    general_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Step", "ChordLength", "ExA", "Weight", "Tension",
        "ExA(mod)", "Efficiency",
    ],
    construction_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Stage", "Step", "ChordLength", "ExA", "Weight",
        "Tension", "ExA(mod)", "Efficiency",
    ],
    numeric_columns: &["ChordLength", "ExA", "Weight", "Tension", "ExA(mod)", "Efficiency"],
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 6,
    sends_parts: false,
    plot_component: None,
    smoothing: Smoothing::Raw,
};

static CABLE_CONFIG: TableSpec = TableSpec {
    table_name: "CableConfiguration",
    table_type: "CABLECONFIG",
    response_key: "CableConfiguration",
    id_column: "Elem",
    id_key: IdKey::Keys,
    general_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Step", "TotalLength", "Elongation",
        "UnstrainedLength", "Sag", "HorizontalDistance", "VerticalDistance", "Gradient",
        "SkewAngle/IEnd", "SkewAngle/JEnd",
    ],
    construction_columns: &[
        "Elem", "NodeI", "NodeJ", "Load", "Stage", "Step", "TotalLength", "Elongation",
        "UnstrainedLength", "Sag", "HorizontalDistance", "VerticalDistance", "Gradient",
    ],
    numeric_columns: &[
        "TotalLength", "Elongation", "UnstrainedLength", "Sag", "HorizontalDistance",
        "VerticalDistance", "Gradient", "SkewAngle/IEnd", "SkewAngle/JEnd",
    ],
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Fixed,
    general_places: 6,
    construction_places: 6,
    sends_parts: false,
    plot_component: None,
    smoothing: Smoothing::Raw,
};

static DISPLACEMENT: TableSpec = TableSpec {
    table_name: "Displacements(Global)",
    table_type: "DISPLACEMENTG",
    response_key: "Displacements(Global)",
    id_column: "Node",
    id_key: IdKey::Key,
    general_columns: &["Node", "Load", "DX", "DY", "DZ", "RX", "RY", "RZ", "RW"],
    construction_columns: &["Node", "Load", "Stage", "Step", "DX", "DY", "DZ", "RX", "RY", "RZ"],
    numeric_columns: &["DX", "DY", "DZ", "RX", "RY", "RZ", "RW"],
    force_unit: "N",
    dist_unit: "mm",
    format: NumberFormat::Scientific,
    general_places: 3,
    construction_places: 6,
    sends_parts: false,
    plot_component: Some("DZ"),
    smoothing: Smoothing::Raw,
};

impl ResultKind {
    pub const ALL: [ResultKind; 9] = [
        ResultKind::BeamForce,
        ResultKind::BeamStress,
        ResultKind::BeamStress7Dof,
        ResultKind::TrussForce,
        ResultKind::TrussStress,
        ResultKind::CableForce,
        ResultKind::CableEfficiency,
        ResultKind::CableConfig,
        ResultKind::Displacement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResultKind::BeamForce => "beam_force",
            ResultKind::BeamStress => "beam_stress",
            ResultKind::BeamStress7Dof => "beam_stress_7dof",
            ResultKind::TrussForce => "truss_force",
            ResultKind::TrussStress => "truss_stress",
            ResultKind::CableForce => "cable_force",
            ResultKind::CableEfficiency => "cable_efficiency",
            ResultKind::CableConfig => "cable_config",
            ResultKind::Displacement => "displacement",
        }
    }

    pub fn spec(&self) -> &'static TableSpec {
        match self {
            ResultKind::BeamForce => &BEAM_FORCE,
            ResultKind::BeamStress => &BEAM_STRESS,
            ResultKind::BeamStress7Dof => &BEAM_STRESS_7DOF,
            ResultKind::TrussForce => &TRUSS_FORCE,
            ResultKind::TrussStress => &TRUSS_STRESS,
            ResultKind::CableForce => &CABLE_FORCE,
            ResultKind::CableEfficiency => &CABLE_EFFICIENCY,
            ResultKind::CableConfig => &CABLE_CONFIG,
            ResultKind::Displacement => &DISPLACEMENT,
        }
    }

    pub fn is_plottable(&self) -> bool {
        self.spec().plot_component.is_some()
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResultKind {
    type Err = MidasError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ResultKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = ResultKind::ALL.iter().map(|k| k.name()).collect();
                MidasError::invalid_option("result type", s, &names)
            })
    }
}

/// 分析类型
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisMode {
    #[default]
    General,
    /// 施工阶段分析；`stages` 为空时不限定阶段
    Construction { stages: Vec<String> },
}

impl AnalysisMode {
    pub fn is_construction(&self) -> bool {
        matches!(self, AnalysisMode::Construction { .. })
    }

    pub fn default_load_case(&self) -> &'static str {
        match self {
            AnalysisMode::General => DEFAULT_GENERAL_LOAD_CASE,
            AnalysisMode::Construction { .. } => DEFAULT_CONSTRUCTION_LOAD_CASE,
        }
    }
}

/// 覆盖结果表默认参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    pub force_unit: Option<String>,
    pub dist_unit: Option<String>,
    pub format: Option<NumberFormat>,
    pub decimal_places: Option<u32>,
    /// 仅梁单元结果有效，默认 `["PartI", "PartJ"]`
    pub parts: Option<Vec<String>>,
    /// 仅施工阶段位移有效
    pub disp_opt: DisplacementOption,
}

/// 组装 `/post/table` 请求体
pub fn build_table_request(
    kind: ResultKind,
    selection: &Selection,
    load_case: &str,
    mode: &AnalysisMode,
    options: &TableOptions,
) -> Value {
    let spec = kind.spec();
    let (columns, places) = match mode {
        AnalysisMode::General => (spec.general_columns, spec.general_places),
        AnalysisMode::Construction { .. } => (spec.construction_columns, spec.construction_places),
    };

    let mut arg = Map::new();
    arg.insert("TABLE_NAME".into(), json!(spec.table_name));
    arg.insert("TABLE_TYPE".into(), json!(spec.table_type));
    arg.insert(
        "UNIT".into(),
        json!({
            "FORCE": options.force_unit.as_deref().unwrap_or(spec.force_unit),
            "DIST": options.dist_unit.as_deref().unwrap_or(spec.dist_unit),
        }),
    );
    arg.insert(
        "STYLES".into(),
        json!({
            "FORMAT": options.format.unwrap_or(spec.format).as_str(),
            "PLACE": options.decimal_places.unwrap_or(places),
        }),
    );
    arg.insert("COMPONENTS".into(), json!(columns));
    arg.insert("NODE_ELEMS".into(), selection.to_json(spec.id_key));
    arg.insert("LOAD_CASE_NAMES".into(), json!([load_case]));

    if spec.sends_parts {
        let parts = match &options.parts {
            Some(parts) => json!(parts),
            None => json!(["PartI", "PartJ"]),
        };
        arg.insert("PARTS".into(), parts);
    }

    if let AnalysisMode::Construction { stages } = mode {
        arg.insert("OPT_CS".into(), json!(true));
        if !stages.is_empty() {
            arg.insert("STAGE_STEP".into(), json!(stages));
        }
        if kind == ResultKind::Displacement {
            arg.insert("DISP_OPT".into(), json!(options.disp_opt.as_str()));
        }
    }

    json!({ "Argument": arg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_kind() {
        assert_eq!("beam_force".parse::<ResultKind>().unwrap(), ResultKind::BeamForce);
        assert_eq!(
            "Beam_Stress_7DOF".parse::<ResultKind>().unwrap(),
            ResultKind::BeamStress7Dof
        );
        match "shell_force".parse::<ResultKind>().unwrap_err() {
            MidasError::InvalidOption { expected, .. } => {
                assert!(expected.contains("cable_config"));
                assert!(expected.contains("displacement"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_beam_force_general_request() {
        let body = build_table_request(
            ResultKind::BeamForce,
            &Selection::Ids(vec![1, 2, 3]),
            DEFAULT_GENERAL_LOAD_CASE,
            &AnalysisMode::General,
            &TableOptions::default(),
        );
        let arg = &body["Argument"];
        assert_eq!(arg["TABLE_NAME"], "BeamForce");
        assert_eq!(arg["UNIT"], json!({"FORCE": "N", "DIST": "mm"}));
        assert_eq!(arg["STYLES"], json!({"FORMAT": "Fixed", "PLACE": 6}));
        assert_eq!(arg["NODE_ELEMS"], json!({"KEY": [1, 2, 3]}));
        assert_eq!(arg["LOAD_CASE_NAMES"], json!(["comb1(CB)"]));
        assert_eq!(arg["PARTS"], json!(["PartI", "PartJ"]));
        assert_eq!(arg["COMPONENTS"][2], "Part");
        assert!(arg.get("OPT_CS").is_none());
    }

    #[test]
    fn test_truss_construction_request() {
        let mode = AnalysisMode::Construction {
            stages: vec!["CS1".into(), "CS2".into()],
        };
        let body = build_table_request(
            ResultKind::TrussForce,
            &Selection::Ids(vec![33, 34]),
            mode.default_load_case(),
            &mode,
            &TableOptions::default(),
        );
        let arg = &body["Argument"];
        assert_eq!(arg["NODE_ELEMS"], json!({"KEYS": [33, 34]}));
        assert_eq!(arg["UNIT"], json!({"FORCE": "kN", "DIST": "m"}));
        assert_eq!(arg["STYLES"]["PLACE"], 12);
        assert_eq!(arg["OPT_CS"], true);
        assert_eq!(arg["STAGE_STEP"], json!(["CS1", "CS2"]));
        assert_eq!(arg["LOAD_CASE_NAMES"], json!(["合计(CS)"]));
        assert!(arg.get("PARTS").is_none());
        assert!(arg.get("DISP_OPT").is_none());
    }

    #[test]
    fn test_displacement_construction_options() {
        let mode = AnalysisMode::Construction { stages: vec![] };
        let options = TableOptions {
            disp_opt: DisplacementOption::Real,
            decimal_places: Some(4),
            ..Default::default()
        };
        let body = build_table_request(
            ResultKind::Displacement,
            &Selection::All,
            "合计(CS)",
            &mode,
            &options,
        );
        let arg = &body["Argument"];
        assert_eq!(arg["TABLE_NAME"], "Displacements(Global)");
        assert_eq!(arg["STYLES"], json!({"FORMAT": "Scientific", "PLACE": 4}));
        assert_eq!(arg["DISP_OPT"], "Real");
        assert_eq!(arg["NODE_ELEMS"], json!({}));
        assert!(arg.get("STAGE_STEP").is_none());
        assert!(!arg["COMPONENTS"].as_array().unwrap().contains(&json!("RW")));
    }

    #[test]
    fn test_seven_dof_response_key() {
        let spec = ResultKind::BeamStress7Dof.spec();
        assert_eq!(spec.table_name, "BeamStress(7DOF)");
        assert_eq!(spec.response_key, "BeamStress(7thDOF)");
        assert_eq!(spec.smoothing, Smoothing::Pairwise);
    }

    #[test]
    fn test_cable_tables_not_plottable() {
        assert!(!ResultKind::CableEfficiency.is_plottable());
        assert!(!ResultKind::CableConfig.is_plottable());
        assert!(ResultKind::CableForce.is_plottable());
    }
}
