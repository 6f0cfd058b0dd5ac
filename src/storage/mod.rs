use std::sync::Arc;

use crate::models::{
    assignments::{entities::Assignment, requests::CreateAssignmentRequest},
    reviews::entities::{Review, ReviewStatus},
    submissions::{entities::Submission, requests::CreateSubmissionRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use crate::store::KeyValueStore;

use crate::errors::Result;

pub mod kv_storage;

/// 领域数据仓库
///
/// 所有写操作都先写入持久化存储，成功后才更新内存中的集合。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（演示数据初始化）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 列出所有用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 统计用户数
    async fn count_users(&self) -> Result<usize>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment>;
    // 列出作业
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;

    /// 提交管理方法
    // 创建提交（自动计算版本号）
    async fn create_submission(
        &self,
        author_id: &str,
        req: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 列出提交
    async fn list_submissions(&self) -> Result<Vec<Submission>>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: &str) -> Result<Option<Submission>>;
    // 列出某学生的提交
    async fn list_submissions_by_author(&self, author_id: &str) -> Result<Vec<Submission>>;

    /// 评审管理方法
    // 追加评审记录
    async fn insert_reviews(&self, reviews: Vec<Review>) -> Result<Vec<Review>>;
    // 按 ID 更新评审记录，不存在时返回 None
    async fn update_review(&self, review: Review) -> Result<Option<Review>>;
    // 列出评审
    async fn list_reviews(&self) -> Result<Vec<Review>>;
    // 列出某提交的评审
    async fn list_reviews_by_submission(&self, submission_id: &str) -> Result<Vec<Review>>;
    // 列出分配给某评审人的评审
    async fn list_reviews_by_reviewer(&self, reviewer_id: &str) -> Result<Vec<Review>>;
    // 查找 (提交, 评审人, 状态) 对应的第一条评审
    async fn find_review(
        &self,
        submission_id: &str,
        reviewer_id: &str,
        status: ReviewStatus,
    ) -> Result<Option<Review>>;

    /// 会话方法
    // 当前登录用户
    async fn get_current_user(&self) -> Result<Option<User>>;
    // 设置当前登录用户，None 表示登出
    async fn set_current_user(&self, user: Option<User>) -> Result<()>;

    // 从持久化存储重新加载所有集合（不合并，后写者覆盖）
    async fn reload(&self) -> Result<()>;
}

pub async fn create_storage(store: Arc<dyn KeyValueStore>) -> Result<Arc<dyn Storage>> {
    let storage = kv_storage::KvStorage::load(store).await?;
    Ok(Arc::new(storage))
}
