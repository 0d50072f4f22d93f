//! # extract 子命令 CLI 定义
//!
//! `ResultArgs` 描述一次结果表请求，`extract` 和 `plot` 共用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/plot.rs` 使用
//! - 参数传递给 `commands/extract.rs`, `commands/plot.rs`

use clap::Args;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 结果请求参数
// ─────────────────────────────────────────────────────────────

/// 结果表请求参数
#[derive(Args, Debug, Clone)]
pub struct ResultArgs {
    /// Result type: beam_force, beam_stress, beam_stress_7dof, truss_force,
    /// truss_stress, cable_force, cable_efficiency, cable_config, displacement
    #[arg(short = 't', long = "type")]
    pub kind: String,

    /// Elements/nodes: "1,2,3", "101 to 105", a structure group name, or "all"
    #[arg(short, long, default_value = "all")]
    pub elements: String,

    /// Load case name (default: comb1(CB), or 合计(CS) for construction stages)
    #[arg(short, long)]
    pub load_case: Option<String>,

    /// Construction stage results
    #[arg(long, default_value_t = false)]
    pub construction: bool,

    /// Restrict construction stage results to these stages (implies --construction)
    #[arg(long, value_delimiter = ',')]
    pub stages: Vec<String>,

    /// Force unit sent with the request (e.g. N, kN)
    #[arg(long)]
    pub force_unit: Option<String>,

    /// Length unit sent with the request (e.g. mm, m)
    #[arg(long)]
    pub dist_unit: Option<String>,

    /// Number format: Fixed, Scientific, Default
    #[arg(long)]
    pub format: Option<String>,

    /// Decimal places
    #[arg(long)]
    pub places: Option<u32>,

    /// Beam parts (e.g. PartI,PartJ)
    #[arg(long, value_delimiter = ',')]
    pub parts: Vec<String>,

    /// Construction stage displacement: Accumulative, Current, Real
    #[arg(long, default_value = "Accumulative")]
    pub disp_opt: String,
}

// ─────────────────────────────────────────────────────────────
// extract 子命令
// ─────────────────────────────────────────────────────────────

/// extract 子命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub result: ResultArgs,

    /// Write the whole table to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Number of rows to print
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    /// Print the raw JSON reply instead of a table
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}
