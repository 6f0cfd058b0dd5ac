use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub store: StoreConfig,
    pub review: ReviewConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(rename = "type")]
    pub store_type: String,
    pub file: FileStoreConfig,
    pub redis: RedisConfig,
    pub memory: MemoryConfig,
}

/// 文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    pub dir: String, // profile 目录，每个键一个 JSON 文件
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
}

/// 内存存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

/// 互评配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// 作业未设置（或设置为非正数）时每份提交分配的评审人数
    pub default_reviewers_per_submission: u32,
    /// 同一评审人对同一提交重复提交评审时的处理策略
    pub resubmission: ResubmissionPolicy,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            default_reviewers_per_submission: 2,
            resubmission: ResubmissionPolicy::Overwrite,
        }
    }
}

/// 重复评审策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResubmissionPolicy {
    Overwrite, // 覆盖已完成的评审
    Reject,    // 拒绝重复提交
    Append,    // 追加一条新的已完成评审
}

/// 演示数据配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
}
