//! 键值存储上的领域仓库实现
//!
//! 四个集合（users/assignments/submissions/reviews）各自以 JSON 数组保存在
//! 同名键下，当前会话用户保存在 `currentUser` 键下。内存中保留一份镜像，
//! 读操作只访问镜像。

mod assignments;
mod reviews;
mod session;
mod submissions;
mod users;

use crate::errors::{PeerReviewError, Result};
use crate::models::{
    assignments::entities::Assignment, reviews::entities::Review,
    submissions::entities::Submission, users::entities::User,
};
use crate::store::KeyValueStore;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 存储键
pub mod keys {
    pub const USERS: &str = "users";
    pub const ASSIGNMENTS: &str = "assignments";
    pub const SUBMISSIONS: &str = "submissions";
    pub const REVIEWS: &str = "reviews";
    pub const CURRENT_USER: &str = "currentUser";
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Collections {
    pub users: Vec<User>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
    pub reviews: Vec<Review>,
    pub current_user: Option<User>,
}

/// 键值存储仓库
pub struct KvStorage {
    store: Arc<dyn KeyValueStore>,
    pub(crate) state: RwLock<Collections>,
}

impl KvStorage {
    /// 从存储加载所有集合，缺失的键视为空集合
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let collections = Self::read_collections(store.as_ref()).await?;
        info!(
            "Repository loaded from {} store: {} users, {} assignments, {} submissions, {} reviews",
            store.backend_name(),
            collections.users.len(),
            collections.assignments.len(),
            collections.submissions.len(),
            collections.reviews.len()
        );
        Ok(Self {
            store,
            state: RwLock::new(collections),
        })
    }

    async fn read_collections(store: &dyn KeyValueStore) -> Result<Collections> {
        Ok(Collections {
            users: Self::read_list(store, keys::USERS).await?,
            assignments: Self::read_list(store, keys::ASSIGNMENTS).await?,
            submissions: Self::read_list(store, keys::SUBMISSIONS).await?,
            reviews: Self::read_list(store, keys::REVIEWS).await?,
            current_user: store
                .get::<Option<User>>(keys::CURRENT_USER)
                .await
                .map_err(|e| {
                    PeerReviewError::store_operation(format!("读取当前用户失败: {e}"))
                })?
                .flatten(),
        })
    }

    async fn read_list<T: DeserializeOwned>(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<Vec<T>> {
        let items = store
            .get::<Option<Vec<T>>>(key)
            .await
            .map_err(|e| PeerReviewError::store_operation(format!("读取 {key} 失败: {e}")))?
            .flatten()
            .unwrap_or_default();
        Ok(items)
    }

    /// 写入整个集合，写入成功后调用方才能提交内存镜像
    pub(crate) async fn persist<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<()> {
        self.store
            .set(key, value)
            .await
            .map_err(|e| PeerReviewError::store_operation(format!("写入 {key} 失败: {e}")))?;
        debug!("Persisted key '{}' to {} store", key, self.store.backend_name());
        Ok(())
    }

    pub(crate) async fn reload_impl(&self) -> Result<()> {
        let collections = Self::read_collections(self.store.as_ref()).await?;
        let mut state = self.state.write().await;
        *state = collections;
        info!("Repository reloaded from {} store", self.store.backend_name());
        Ok(())
    }
}

// Storage trait 实现
use crate::models::{
    assignments::requests::CreateAssignmentRequest,
    reviews::entities::ReviewStatus,
    submissions::requests::CreateSubmissionRequest,
    users::requests::CreateUserRequest,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for KvStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn count_users(&self) -> Result<usize> {
        self.count_users_impl().await
    }

    // 作业模块
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(req).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        author_id: &str,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(author_id, req).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }

    async fn get_submission_by_id(&self, id: &str) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions_by_author(&self, author_id: &str) -> Result<Vec<Submission>> {
        self.list_submissions_by_author_impl(author_id).await
    }

    // 评审模块
    async fn insert_reviews(&self, reviews: Vec<Review>) -> Result<Vec<Review>> {
        self.insert_reviews_impl(reviews).await
    }

    async fn update_review(&self, review: Review) -> Result<Option<Review>> {
        self.update_review_impl(review).await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.list_reviews_impl().await
    }

    async fn list_reviews_by_submission(&self, submission_id: &str) -> Result<Vec<Review>> {
        self.list_reviews_by_submission_impl(submission_id).await
    }

    async fn list_reviews_by_reviewer(&self, reviewer_id: &str) -> Result<Vec<Review>> {
        self.list_reviews_by_reviewer_impl(reviewer_id).await
    }

    async fn find_review(
        &self,
        submission_id: &str,
        reviewer_id: &str,
        status: ReviewStatus,
    ) -> Result<Option<Review>> {
        self.find_review_impl(submission_id, reviewer_id, status).await
    }

    // 会话模块
    async fn get_current_user(&self) -> Result<Option<User>> {
        self.get_current_user_impl().await
    }

    async fn set_current_user(&self, user: Option<User>) -> Result<()> {
        self.set_current_user_impl(user).await
    }

    async fn reload(&self) -> Result<()> {
        self.reload_impl().await
    }
}
