//! # query 子命令 CLI 定义

use clap::{Args, ValueEnum};

/// 可查询的模型数据
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Entity {
    Nodes,
    Elements,
    Supports,
    Springs,
    RigidLinks,
    ElasticLinks,
    LoadCases,
    SelfWeight,
    NodalLoads,
    ElementTemps,
    GradientTemps,
    SystemTemps,
    Tendons,
    BeamPrestress,
    Stages,
}

/// query 子命令参数
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// What to query
    #[arg(value_enum)]
    pub entity: Entity,
}
