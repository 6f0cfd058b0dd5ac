use crate::config::AppConfig;
use crate::errors::{PeerReviewError, Result};
use crate::models::assignments::requests::{CreateAssignmentRequest, RubricCriterionInput};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::store::KeyValueStore;
use crate::store::register::{get_store_plugin, register_builtin_store_plugins};
use crate::utils::validate::validate_email;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub store: Arc<dyn KeyValueStore>,
    pub storage: Arc<dyn Storage>,
}

const FALLBACK_STORE: &str = "moka";

async fn open_store_plugin(name: &str) -> Result<Arc<dyn KeyValueStore>> {
    let constructor = get_store_plugin(name).ok_or_else(|| {
        PeerReviewError::store_plugin_not_found(format!(
            "Store backend '{name}' not found in registry"
        ))
    })?;
    let store = constructor().await?;
    Ok(Arc::from(store))
}

/// 创建存储实例，配置的后端不可用时回退到内存存储
async fn create_store() -> Result<Arc<dyn KeyValueStore>> {
    let config = AppConfig::get();
    let store_type = &config.store.store_type;

    warn!("Attempting to create {} store backend", store_type);

    match open_store_plugin(store_type).await {
        Ok(store) => {
            warn!("Successfully created {} store backend", store_type);
            return Ok(store);
        }
        Err(e) => {
            warn!("Failed to create {} store: {}", store_type, e);
        }
    }

    if store_type != FALLBACK_STORE {
        warn!("Falling back to in-memory store, data will not survive restarts");
        match open_store_plugin(FALLBACK_STORE).await {
            Ok(store) => {
                warn!("Successfully created fallback Moka (in-memory) store backend");
                return Ok(store);
            }
            Err(fallback_e) => {
                warn!("Failed to create fallback Moka store: {}", fallback_e);
            }
        }
    }

    Err(PeerReviewError::store_connection(format!(
        "No store backend available (tried: {store_type})"
    )))
}

/// 演示用户
fn demo_users() -> Vec<CreateUserRequest> {
    [
        ("Prof. Chen", UserRole::Teacher, "chen@school.example"),
        ("Alice", UserRole::Student, "alice@school.example"),
        ("Bob", UserRole::Student, "bob@school.example"),
        ("Carol", UserRole::Student, "carol@school.example"),
        ("Dave", UserRole::Student, "dave@school.example"),
    ]
    .into_iter()
    .map(|(name, role, email)| CreateUserRequest {
        name: name.to_string(),
        role,
        email: email.to_string(),
    })
    .collect()
}

/// 演示作业
fn demo_assignment() -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        title: "Essay: Ownership in Rust".to_string(),
        description: Some("Explain ownership and borrowing in under 500 words.".to_string()),
        rubric: vec![
            RubricCriterionInput {
                title: "Clarity".to_string(),
                max_score: 5,
            },
            RubricCriterionInput {
                title: "Correctness".to_string(),
                max_score: 5,
            },
            RubricCriterionInput {
                title: "Examples".to_string(),
                max_score: 10,
            },
        ],
        reviewers_per_submission: Some(i64::from(
            AppConfig::get().review.default_reviewers_per_submission,
        )),
    }
}

/// 初始化演示数据
/// 如果 profile 中没有任何用户，则写入演示用户和一份示例作业
pub async fn seed_demo_data(storage: &Arc<dyn Storage>) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Profile already has {} user(s), skipping demo seed", count);
        return Ok(());
    }

    info!("No users found in profile, seeding demo data...");

    for user in demo_users() {
        if let Err(e) = validate_email(&user.email) {
            warn!("Skipping demo user {}: {}", user.name, e);
            continue;
        }
        let created = storage.create_user(user).await?;
        debug!("Seeded user {} ({}) as {}", created.name, created.id, created.role);
    }

    if storage.list_assignments().await?.is_empty() {
        let assignment = storage.create_assignment(demo_assignment()).await?;
        info!("Seeded demo assignment {} ({})", assignment.title, assignment.id);
    }

    Ok(())
}

/// 准备启动上下文
/// 包括存储后端、领域仓库和演示数据
pub async fn prepare_startup() -> Result<StartupContext> {
    register_builtin_store_plugins();

    if cfg!(debug_assertions) {
        crate::store::register::debug_store_registry();
        debug!("Debug mode: Store registry is enabled");
    }

    let store = create_store().await?;
    warn!("Store backend '{}' initialized", store.backend_name());

    let storage = crate::storage::create_storage(store.clone()).await?;

    if AppConfig::get().seed.enabled {
        seed_demo_data(&storage).await?;
    }

    Ok(StartupContext { store, storage })
}
