//! # 刚性连接
//!
//! `/db/RIGD`：主节点与从节点之间的刚性连接。
//! 自由度字符串共 6 位（DX DY DZ RX RY RZ），1 表示刚性。

use super::{assign, check_dof_string, single_item};
use crate::api::MidasApi;
use crate::error::Result;

use serde_json::{json, Map, Value};

const ENDPOINT: &str = "/db/RIGD";

pub struct RigidLinkProcessor<'a> {
    api: &'a MidasApi,
}

impl<'a> RigidLinkProcessor<'a> {
    pub fn new(api: &'a MidasApi) -> Self {
        Self { api }
    }

    pub fn query(&self) -> Result<Value> {
        self.api.get(ENDPOINT)
    }

    pub fn add_rigid_link(
        &self,
        master: u32,
        dof: &str,
        slaves: &[u32],
        group_name: &str,
    ) -> Result<Value> {
        let body = link_json(master, dof, slaves, group_name)?;
        log::info!("Adding rigid link on master node {}", master);
        self.api.post(ENDPOINT, body)
    }

    pub fn update_rigid_link(
        &self,
        master: u32,
        dof: &str,
        slaves: &[u32],
        group_name: &str,
    ) -> Result<Value> {
        let body = link_json(master, dof, slaves, group_name)?;
        self.api.put(ENDPOINT, body)
    }

    pub fn delete_all(&self) -> Result<Value> {
        self.api.delete(ENDPOINT)
    }

    pub fn delete_single(&self, master: u32) -> Result<Value> {
        self.api.delete(&format!("{}/{}", ENDPOINT, master))
    }
}

fn link_json(master: u32, dof: &str, slaves: &[u32], group_name: &str) -> Result<Value> {
    check_dof_string(dof, 6, "rigid link DOF")?;
    let mut item = Map::new();
    item.insert("GROUP_NAME".into(), json!(group_name));
    item.insert("DOF".into(), json!(dof));
    item.insert("S_NODE".into(), json!(slaves));
    Ok(assign(master, single_item(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::recording_api;
    use crate::api::HttpMethod;

    #[test]
    fn test_rigid_link_payload() {
        let (api, rec) = recording_api();
        RigidLinkProcessor::new(&api)
            .add_rigid_link(1, "110001", &[2, 3, 4, 5], "")
            .unwrap();

        assert_eq!(rec.last().unwrap().method, HttpMethod::Post);
        assert_eq!(
            rec.last_body().unwrap(),
            json!({"Assign": {"1": {"ITEMS": [{
                "ID": 1, "GROUP_NAME": "", "DOF": "110001", "S_NODE": [2, 3, 4, 5]
            }]}}})
        );
    }

    #[test]
    fn test_update_uses_put() {
        let (api, rec) = recording_api();
        RigidLinkProcessor::new(&api)
            .update_rigid_link(1, "111000", &[6, 7], "G1")
            .unwrap();
        assert_eq!(rec.last().unwrap().method, HttpMethod::Put);
    }

    #[test]
    fn test_bad_dof_rejected() {
        let (api, rec) = recording_api();
        assert!(RigidLinkProcessor::new(&api)
            .add_rigid_link(1, "1100010", &[2], "")
            .is_err());
        assert_eq!(rec.count(), 0);
    }
}
