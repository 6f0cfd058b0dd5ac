use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Peer Review")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("store.type", "file")?
            .set_default("store.file.dir", "./data/profile")?
            .set_default("store.redis.url", "redis://127.0.0.1/")?
            .set_default("store.redis.key_prefix", "peer_review:")?
            .set_default("store.memory.max_capacity", 1024)?
            .set_default("review.default_reviewers_per_submission", 2)?
            .set_default("review.resubmission", "overwrite")?
            .set_default("seed.enabled", true)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，如 PEER_REVIEW_REVIEW__RESUBMISSION=reject
            .add_source(
                Environment::with_prefix("PEER_REVIEW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("store.type", std::env::var("STORE_TYPE").ok())?
            .set_override_option("store.file.dir", std::env::var("STORE_DIR").ok())?
            .set_override_option("store.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "store.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 评审人数至少为 1
        if app_config.review.default_reviewers_per_submission == 0 {
            app_config.review.default_reviewers_per_submission = 1;
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}
