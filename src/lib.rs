//! # civil-mapi - 桥梁分析程序本地自动化接口客户端
//!
//! 通过 HTTP 接口驱动正在运行的 MIDAS Civil NX：组装建模数据、
//! 打开/分析/保存模型、提取结果表并导出或绘图。
//!
//! ## 依赖关系
//! ```text
//! lib.rs (MidasCivil)
//!   ├── api/        (请求入口与传输层)
//!   ├── config.rs   (连接配置)
//!   ├── models/     (枚举选项、选择)
//!   ├── pre/        (节点、单元、边界、连接)
//!   ├── loads/      (荷载)
//!   ├── operations  (打开、分析、保存)
//!   ├── post/       (结果表、绘图、导出)
//!   ├── utils/      (终端输出、进度)
//!   └── error.rs    (错误处理)
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod loads;
pub mod models;
pub mod operations;
pub mod post;
pub mod pre;
pub mod utils;

pub use api::MidasApi;
pub use config::MidasConfig;
pub use error::{MidasError, Result};

use loads::{
    ConstructionStageProcessor, PrestressLoadsProcessor, StaticLoadsProcessor,
    TemperatureLoadsProcessor,
};
use models::ElementKind;
use operations::MidasOperations;
use post::PostProcessor;
use pre::{
    ElasticLinkProcessor, ElementProcessor, ModelSettings, NodeProcessor, PointSpringProcessor,
    RigidLinkProcessor, SupportProcessor,
};

/// 客户端入口，持有一个 [`MidasApi`] 并按需借出各处理器
pub struct MidasCivil {
    api: MidasApi,
}

impl MidasCivil {
    pub fn new(config: MidasConfig) -> Result<Self> {
        Ok(Self {
            api: MidasApi::new(config)?,
        })
    }

    pub fn from_api(api: MidasApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &MidasApi {
        &self.api
    }

    pub fn pre(&self) -> Pre<'_> {
        Pre { api: &self.api }
    }

    pub fn loads(&self) -> Loads<'_> {
        Loads { api: &self.api }
    }

    pub fn post(&self) -> PostProcessor<'_> {
        PostProcessor::new(&self.api)
    }

    pub fn operations(&self) -> MidasOperations<'_> {
        MidasOperations::new(&self.api)
    }
}

/// 前处理
#[derive(Clone, Copy)]
pub struct Pre<'a> {
    api: &'a MidasApi,
}

impl<'a> Pre<'a> {
    pub fn model(&self) -> ModelSettings<'a> {
        ModelSettings::new(self.api)
    }

    pub fn nodes(&self) -> NodeProcessor<'a> {
        NodeProcessor::new(self.api)
    }

    pub fn elements(&self, kind: ElementKind) -> ElementProcessor<'a> {
        ElementProcessor::new(self.api, kind)
    }

    pub fn supports(&self) -> SupportProcessor<'a> {
        SupportProcessor::new(self.api)
    }

    pub fn springs(&self) -> PointSpringProcessor<'a> {
        PointSpringProcessor::new(self.api)
    }

    pub fn rigid_links(&self) -> RigidLinkProcessor<'a> {
        RigidLinkProcessor::new(self.api)
    }

    pub fn elastic_links(&self) -> ElasticLinkProcessor<'a> {
        ElasticLinkProcessor::new(self.api)
    }
}

/// 荷载
#[derive(Clone, Copy)]
pub struct Loads<'a> {
    api: &'a MidasApi,
}

impl<'a> Loads<'a> {
    pub fn static_loads(&self) -> StaticLoadsProcessor<'a> {
        StaticLoadsProcessor::new(self.api)
    }

    pub fn temperature(&self) -> TemperatureLoadsProcessor<'a> {
        TemperatureLoadsProcessor::new(self.api)
    }

    pub fn prestress(&self) -> PrestressLoadsProcessor<'a> {
        PrestressLoadsProcessor::new(self.api)
    }

    pub fn stages(&self) -> ConstructionStageProcessor<'a> {
        ConstructionStageProcessor::new(self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use crate::models::LoadCaseType;
    use crate::pre::{Node, Support};
    use serde_json::json;

    #[test]
    fn test_facade_shares_one_client() {
        let (api, rec) = recording_api();
        let civil = MidasCivil::from_api(api);

        civil
            .pre()
            .nodes()
            .create_nodes(&[Node::new(1, 0.0, 0.0, 0.0)])
            .unwrap();
        let mut supports = civil.pre().supports();
        supports.add_support(1, Support::fixed()).unwrap();
        supports.apply().unwrap();
        civil
            .loads()
            .static_loads()
            .add_load_case(1, "DL", LoadCaseType::Dead, "")
            .unwrap();
        civil.operations().analyze().unwrap();

        let endpoints: Vec<String> = rec
            .requests()
            .iter()
            .map(|r| r.url.rsplit("/civil").next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(endpoints, vec!["/db/NODE", "/db/cons", "/db/STLD", "/doc/anal"]);
        assert!(rec.requests().iter().all(|r| r.api_key == "test-key"));
        assert_eq!(rec.last_body().unwrap(), json!({}));
    }
}
