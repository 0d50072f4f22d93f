//! # query 命令实现
//!
//! 查询模型数据并打印 JSON 回复。

use crate::cli::query::{Entity, QueryArgs};

use civil_mapi::models::ElementKind;
use civil_mapi::utils::output;
use civil_mapi::{MidasCivil, Result};

pub fn execute(civil: &MidasCivil, args: QueryArgs) -> Result<()> {
    let pre = civil.pre();
    let loads = civil.loads();

    let reply = match args.entity {
        Entity::Nodes => pre.nodes().query()?,
        Entity::Elements => pre.elements(ElementKind::Beam).query()?,
        Entity::Supports => pre.supports().query()?,
        Entity::Springs => pre.springs().query()?,
        Entity::RigidLinks => pre.rigid_links().query()?,
        Entity::ElasticLinks => pre.elastic_links().query()?,
        Entity::LoadCases => loads.static_loads().query_load_cases()?,
        Entity::SelfWeight => loads.static_loads().query_self_weight()?,
        Entity::NodalLoads => loads.static_loads().query_nodal_loads()?,
        Entity::ElementTemps => loads.temperature().query_element_temps()?,
        Entity::GradientTemps => loads.temperature().query_gradient_temps()?,
        Entity::SystemTemps => loads.temperature().query_system_temps()?,
        Entity::Tendons => loads.prestress().query()?,
        Entity::BeamPrestress => loads.prestress().query_beam_prestress()?,
        Entity::Stages => {
            let names = loads.stages().stage_names()?;
            output::print_info(&format!("{} construction stages", names.len()));
            for name in names {
                println!("  {}", name);
            }
            return Ok(());
        }
    };

    output::print_json(&reply);
    Ok(())
}
