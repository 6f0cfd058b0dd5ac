use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::declare_store_plugin;
use crate::errors::{PeerReviewError, Result};
use crate::store::KeyValueStore;
use crate::utils::generate_id;

declare_store_plugin!("file", FileStore);

/// 基于 profile 目录的文件存储
///
/// 每个键对应目录下的一个 `<key>.json` 文件。写入先落到临时文件再重命名，
/// 读到的要么是旧值要么是新值。多个进程共享同一目录时后写者覆盖先写者。
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub async fn open() -> Result<Self> {
        let config = AppConfig::get();
        Self::open_at(&config.store.file.dir).await
    }

    pub async fn open_at<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            PeerReviewError::store_connection(format!(
                "无法创建存储目录 {}: {e}",
                dir.display()
            ))
        })?;
        debug!("FileStore opened at: {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // 键直接作为文件名，禁止路径分隔符
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(PeerReviewError::validation(format!("非法的存储键: '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn backend_name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                debug!("Successfully retrieved key: {}", key);
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Key not found in store: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read key '{}': {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        // 每次写入使用独立的临时文件，共享目录的多个写者互不干扰
        let tmp_path = self.dir.join(format!(".{key}.{}.json.tmp", generate_id()));

        tokio::fs::write(&tmp_path, value.as_bytes()).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            error!("Failed to replace key '{}': {}", key, e);
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!("Successfully wrote key: {} ({} bytes)", key, value.len());
        Ok(())
    }
}
