//! # 枚举选项
//!
//! 接口中所有取值受限的字符串选项。字符串解析失败时返回
//! `MidasError::InvalidOption`，因此非法选项不会进入请求。
//!
//! ## 依赖关系
//! - 被 `pre/`, `loads/`, `post/`, `cli/` 使用

use crate::error::{MidasError, Result};

use std::fmt;
use std::str::FromStr;

/// 定义一个与接口字符串一一对应的枚举
macro_rules! api_option {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// 所有可选值（接口字符串）
            pub const ALL: &'static [&'static str] = &[$($text),+];

            /// 接口使用的字符串
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = MidasError;

            fn from_str(s: &str) -> Result<Self> {
                let s = s.trim();
                $(if s.eq_ignore_ascii_case($text) {
                    return Ok($name::$variant);
                })+
                Err(MidasError::invalid_option($kind, s, Self::ALL))
            }
        }
    };
}

api_option! {
    /// 力单位
    ForceUnit, "force unit" {
        Kn => "KN",
        N => "N",
        Kgf => "KGF",
        Tonf => "TONF",
        Lbf => "LBF",
        Kips => "KIPS",
    }
}

api_option! {
    /// 长度单位
    DistUnit, "distance unit" {
        M => "M",
        Cm => "CM",
        Mm => "MM",
        In => "IN",
        Ft => "FT",
    }
}

api_option! {
    /// 材料类型
    MaterialType, "material type" {
        User => "USER",
        Steel => "STEEL",
        Concrete => "CONC",
        Src => "SRC",
    }
}

api_option! {
    /// 单元类型
    ElementKind, "element type" {
        Beam => "BEAM",
        Truss => "TRUSS",
        Cable => "TENSTR",
    }
}

api_option! {
    /// 静力荷载工况类型
    LoadCaseType, "load case type" {
        /// 施工阶段荷载
        ConstructionStage => "CS",
        /// 活荷载
        Live => "L",
        /// 预应力
        Prestress => "PS",
        /// 风荷载
        Wind => "W",
        /// 徐变
        Creep => "CR",
        /// 收缩
        Shrinkage => "SH",
        /// 温度荷载
        Temperature => "T",
        /// 温度梯度
        TemperatureGradient => "TPG",
        /// 恒荷载
        Dead => "D",
    }
}

impl LoadCaseType {
    /// 未提供描述时使用的默认描述
    pub fn default_description(&self) -> &'static str {
        match self {
            LoadCaseType::ConstructionStage => "施工阶段荷载",
            LoadCaseType::Live => "活荷载",
            LoadCaseType::Prestress => "预应力",
            LoadCaseType::Wind => "风荷载",
            LoadCaseType::Creep => "徐变",
            LoadCaseType::Shrinkage => "收缩",
            LoadCaseType::Temperature => "温度荷载",
            LoadCaseType::TemperatureGradient => "温度梯度",
            LoadCaseType::Dead => "恒荷载",
        }
    }
}

api_option! {
    /// 钢束预应力输入方式
    PrestressType, "prestress type" {
        Force => "FORCE",
        Stress => "STRESS",
    }
}

api_option! {
    /// 张拉方式
    TensionOrder, "tension order" {
        Begin => "BEGIN",
        End => "END",
        Both => "BOTH",
    }
}

api_option! {
    /// 梁单元预应力方向（局部坐标）
    BeamPrestressDir, "beam prestress direction" {
        Y => "Y",
        Z => "Z",
    }
}

impl BeamPrestressDir {
    /// 接口中的 DIR 编码
    pub fn code(&self) -> u8 {
        match self {
            BeamPrestressDir::Y => 0,
            BeamPrestressDir::Z => 1,
        }
    }
}

api_option! {
    /// 仅受压 / 仅受拉（非线性弹性支撑和弹性连接共用）
    OneWayType, "one-way type" {
        Compression => "COMP",
        Tension => "TENS",
    }
}

api_option! {
    /// 施工阶段位移输出方式
    DisplacementOption, "displacement option" {
        Accumulative => "Accumulative",
        Current => "Current",
        Real => "Real",
    }
}

impl Default for DisplacementOption {
    fn default() -> Self {
        DisplacementOption::Accumulative
    }
}

api_option! {
    /// 结果表数字格式
    NumberFormat, "number format" {
        Fixed => "Fixed",
        Scientific => "Scientific",
        Default => "Default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_load_case_type() {
        assert_eq!("D".parse::<LoadCaseType>().unwrap(), LoadCaseType::Dead);
        assert_eq!("tpg".parse::<LoadCaseType>().unwrap(), LoadCaseType::TemperatureGradient);
        assert_eq!(LoadCaseType::Live.as_str(), "L");
    }

    #[test]
    fn test_reject_unknown_option() {
        let err = "SEISMIC".parse::<LoadCaseType>().unwrap_err();
        match err {
            MidasError::InvalidOption { kind, value, expected } => {
                assert_eq!(kind, "load case type");
                assert_eq!(value, "SEISMIC");
                assert!(expected.contains("TPG"));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!("MIDDLE".parse::<TensionOrder>().is_err());
        assert!("X".parse::<BeamPrestressDir>().is_err());
    }

    #[test]
    fn test_beam_prestress_dir_code() {
        assert_eq!(BeamPrestressDir::Y.code(), 0);
        assert_eq!(BeamPrestressDir::Z.code(), 1);
    }

    #[test]
    fn test_cable_element_string() {
        assert_eq!(ElementKind::Cable.to_string(), "TENSTR");
        assert_eq!("tenstr".parse::<ElementKind>().unwrap(), ElementKind::Cable);
    }
}
