use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::declare_store_plugin;
use crate::errors::{PeerReviewError, Result};
use crate::store::KeyValueStore;

declare_store_plugin!("redis", RedisStore);

/// Redis 存储，多个进程共享同一份数据，后写者覆盖
pub struct RedisStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisStore {
    pub async fn open() -> Result<Self> {
        let config = AppConfig::get();
        let redis_config = &config.store.redis;

        let client = redis::Client::open(redis_config.url.clone()).map_err(|e| {
            PeerReviewError::store_connection(format!("Redis URL 无效 {}: {e}", redis_config.url))
        })?;

        let store = Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
        };

        // 测试 Redis 连接
        let mut conn = store.get_connection().await.map_err(|e| {
            error!(
                "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                e, redis_config.url
            );
            PeerReviewError::store_connection(format!("Redis 连接失败: {e}"))
        })?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| PeerReviewError::store_connection(format!("Redis ping failed: {e}")))?;
        debug!(
            "Redis connection test successful: {}, prefix: '{}'",
            pong, store.key_prefix
        );

        Ok(store)
    }

    async fn get_connection(
        &self,
    ) -> std::result::Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    fn backend_name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(self.make_key(key)).await?;
        if value.is_some() {
            debug!("Successfully retrieved key: {}", key);
        } else {
            debug!("Key not found in store: {}", key);
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.get_connection().await?;
        conn.set::<String, String, ()>(self.make_key(key), value)
            .await?;
        debug!("Successfully wrote key: {}", key);
        Ok(())
    }
}
