//! # 数据模型模块
//!
//! 定义请求中用到的枚举选项和节点/单元选择。
//!
//! ## 依赖关系
//! - 被 `pre/`, `loads/`, `post/`, `cli/` 使用
//! - 子模块: options, selection

pub mod options;
pub mod selection;

pub use options::{
    BeamPrestressDir, DisplacementOption, DistUnit, ElementKind, ForceUnit, LoadCaseType,
    MaterialType, NumberFormat, OneWayType, PrestressType, TensionOrder,
};
pub use selection::{IdKey, Selection};
