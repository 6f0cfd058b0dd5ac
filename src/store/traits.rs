use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::Result;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 后端名称，用于日志
    fn backend_name(&self) -> &'static str;

    /// 读取原始字符串值，键不存在时返回 `None`
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// 写入原始字符串值，写入完成后才返回
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;
}

impl<'a> dyn KeyValueStore + 'a {
    /// 读取并反序列化 JSON 值
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// 序列化为 JSON 并写入
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw).await
    }
}
