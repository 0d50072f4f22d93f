//! # 单位与材料
//!
//! ## 依赖关系
//! - 被 `pre/mod.rs` 导出
//! - 使用 `api/client.rs`

use super::assign;
use crate::api::MidasApi;
use crate::error::Result;
use crate::models::{DistUnit, ForceUnit, MaterialType};

use serde_json::{json, Value};

/// 材料属性（`/db/matl`）
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub kind: MaterialType,
    pub name: String,
    /// 传热特性
    pub he_spec: i64,
    /// 热导率
    pub he_cond: i64,
    /// 填充材料属性
    pub plmt: i64,
    /// 填充材料名称
    pub p_name: String,
    pub mass_density: bool,
    pub damping_ratio: f64,
    /// 1: 规范参数, 2: 各向同性, 3: 各向异性
    pub param_type: u8,
    pub elastic_modulus: Option<f64>,
    pub poisson: Option<f64>,
    pub thermal: Option<f64>,
    /// 容重
    pub density: Option<f64>,
    pub mass: Option<f64>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            kind: MaterialType::User,
            name: String::new(),
            he_spec: 0,
            he_cond: 0,
            plmt: 0,
            p_name: String::new(),
            mass_density: true,
            damping_ratio: 0.0,
            param_type: 2,
            elastic_modulus: None,
            poisson: None,
            thermal: None,
            density: None,
            mass: None,
        }
    }
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            ..Default::default()
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "TYPE": self.kind.as_str(),
            "NAME": self.name,
            "HE_SPEC": self.he_spec,
            "HE_COND": self.he_cond,
            "PLMT": self.plmt,
            "P_NAME": self.p_name,
            "bMASS_DENS": self.mass_density,
            "DAMP_RAT": self.damping_ratio,
            "PARAM": [{
                "P_TYPE": self.param_type,
                "ELAST": self.elastic_modulus,
                "POISN": self.poisson,
                "THERMAL": self.thermal,
                "DEN": self.density,
                "MASS": self.mass,
            }]
        })
    }
}

/// 模型全局设置
pub struct ModelSettings<'a> {
    api: &'a MidasApi,
}

impl<'a> ModelSettings<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    /// 设置模型单位
    pub fn set_units(&self, force: ForceUnit, dist: DistUnit) -> Result<Value> {
        let body = assign(1, json!({ "DIST": dist.as_str(), "FORCE": force.as_str() }));
        let response = self.api.put("/db/unit", body)?;
        log::info!("Units set to {} / {}", force, dist);
        Ok(response)
    }

    /// 定义或覆盖材料
    pub fn define_material(&self, material_id: u32, material: &Material) -> Result<Value> {
        let response = self
            .api
            .put("/db/matl", assign(material_id, material.to_json()))?;
        log::info!("Material {} '{}' written", material_id, material.name);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use crate::api::HttpMethod;

    #[test]
    fn test_set_units_payload() {
        let (api, rec) = recording_api();
        ModelSettings::new(&api)
            .set_units(ForceUnit::Kn, DistUnit::M)
            .unwrap();

        assert_eq!(rec.last().unwrap().method, HttpMethod::Put);
        assert_eq!(rec.last_endpoint().unwrap(), "/db/unit");
        assert_eq!(
            rec.last_body().unwrap(),
            json!({"Assign": {"1": {"DIST": "M", "FORCE": "KN"}}})
        );
    }

    #[test]
    fn test_define_material_defaults() {
        let (api, rec) = recording_api();
        let c50 = Material {
            elastic_modulus: Some(3.45e7),
            poisson: Some(0.2),
            thermal: Some(1e-5),
            density: Some(25.0),
            mass: Some(2.549),
            ..Material::new("C50")
        };
        ModelSettings::new(&api).define_material(1, &c50).unwrap();

        let body = rec.last_body().unwrap();
        let m = &body["Assign"]["1"];
        assert_eq!(m["TYPE"], "USER");
        assert_eq!(m["NAME"], "C50");
        assert_eq!(m["bMASS_DENS"], true);
        assert_eq!(m["P_NAME"], "");
        assert_eq!(m["PARAM"][0]["P_TYPE"], 2);
        assert_eq!(m["PARAM"][0]["ELAST"], 3.45e7);
        assert_eq!(m["PARAM"][0]["POISN"], 0.2);
        assert_eq!(rec.last_endpoint().unwrap(), "/db/matl");
    }
}
