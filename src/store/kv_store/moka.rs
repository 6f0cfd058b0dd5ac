use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::config::AppConfig;
use crate::declare_store_plugin;
use crate::errors::Result;
use crate::store::KeyValueStore;

declare_store_plugin!("moka", MokaStore);

/// 进程内存储，进程退出后数据丢失
pub struct MokaStore {
    inner: Cache<String, String>,
}

impl MokaStore {
    pub async fn open() -> Result<Self> {
        let config = AppConfig::get();
        Ok(Self::with_capacity(config.store.memory.max_capacity))
    }

    /// 不依赖全局配置直接创建，不设置 TTL
    pub fn with_capacity(max_capacity: u64) -> Self {
        let inner = Cache::builder().max_capacity(max_capacity).build();
        debug!("MokaStore initialized with max capacity: {}", max_capacity);
        Self { inner }
    }
}

#[async_trait]
impl KeyValueStore for MokaStore {
    fn backend_name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self.inner.get(key).await;
        if value.is_some() {
            debug!("Successfully retrieved key: {}", key);
        } else {
            debug!("Key not found in store: {}", key);
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        self.inner.insert(key.to_string(), value).await;
        Ok(())
    }
}
