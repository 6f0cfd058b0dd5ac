pub mod progress;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::dashboard::responses::ProgressSummary;
use crate::models::reviews::responses::AssignedReviewItem;
use crate::models::submissions::responses::MySubmissionItem;
use crate::storage::Storage;

/// 面向界面的派生视图
pub struct DashboardService {
    storage: Arc<dyn Storage>,
}

impl DashboardService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 我的提交及其评审进度
    pub async fn my_submissions(&self, user_id: &str) -> Result<Vec<MySubmissionItem>> {
        progress::my_submissions(self, user_id).await
    }

    /// 分配给我的评审任务，待评审在前
    pub async fn my_reviews(&self, user_id: &str) -> Result<Vec<AssignedReviewItem>> {
        progress::my_reviews(self, user_id).await
    }

    /// 整体进度统计
    pub async fn progress(&self) -> Result<ProgressSummary> {
        progress::progress_summary(self).await
    }

    /// 手动刷新：从持久化存储重新读取
    pub async fn reload(&self) -> Result<()> {
        self.storage.reload().await
    }
}
