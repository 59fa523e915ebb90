use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String,
}

/// 以名稱索引的設定物件集合。
///
/// 每個 JSON 物件必須帶有 `name` 欄位，其餘欄位反序列化為 `V`。
/// 重複的名稱以後讀入者為準。
pub struct Manager<V> {
    map: BTreeMap<String, V>,
}

impl<V> Default for Manager<V> {
    fn default() -> Manager<V> {
        Manager { map: BTreeMap::new() }
    }
}

impl<V> Manager<V> {
    pub fn new() -> Manager<V> {
        Manager::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        self.map.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Result<&V, ManagerError> {
        self.map
            .get(name)
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 依名稱排序
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.map.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V> Manager<V>
where
    V: DeserializeOwned,
{
    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = serde_json::from_value(json_value.clone())?;
        let value: V = serde_json::from_value(json_value)?;
        self.insert(named_object.name, value);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: Vec<serde_json::Value>) -> Result<(), ManagerError> {
        for json_value in json_vec {
            self.insert_obj_from_json(json_value)?;
        }
        Ok(())
    }
}
