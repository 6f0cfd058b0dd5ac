pub mod create;

use std::sync::Arc;

use crate::config::{AppConfig, ReviewConfig};
use crate::errors::Result;
use crate::models::submissions::{
    requests::CreateSubmissionRequest, responses::SubmissionWithReviews,
};
use crate::services::ReviewService;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    settings: ReviewConfig,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_settings(storage, AppConfig::get().review.clone())
    }

    pub fn with_settings(storage: Arc<dyn Storage>, settings: ReviewConfig) -> Self {
        Self { storage, settings }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn review_service(&self) -> ReviewService {
        ReviewService::with_settings(self.storage.clone(), self.settings.clone())
    }

    /// 创建提交并自动分配评审人
    pub async fn create_submission(
        &self,
        author_id: &str,
        req: CreateSubmissionRequest,
    ) -> Result<SubmissionWithReviews> {
        create::create_submission(self, author_id, req).await
    }
}
