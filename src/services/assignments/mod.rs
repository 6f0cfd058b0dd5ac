pub mod create;

use std::sync::Arc;

use crate::config::{AppConfig, ReviewConfig};
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    settings: ReviewConfig,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_settings(storage, AppConfig::get().review.clone())
    }

    pub fn with_settings(storage: Arc<dyn Storage>, settings: ReviewConfig) -> Self {
        Self { storage, settings }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn settings(&self) -> &ReviewConfig {
        &self.settings
    }

    /// 创建作业（仅教师）
    pub async fn create_assignment(
        &self,
        teacher_id: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, teacher_id, req).await
    }

    /// 列出作业，最新的在前
    pub async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let mut assignments = self.storage.list_assignments().await?;
        assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(assignments)
    }
}
