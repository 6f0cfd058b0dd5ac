pub mod assign;
pub mod record;

use std::sync::Arc;

use crate::config::{AppConfig, ReviewConfig};
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::reviews::{entities::Review, requests::RecordReviewRequest};
use crate::models::submissions::entities::Submission;
use crate::storage::Storage;

pub struct ReviewService {
    storage: Arc<dyn Storage>,
    settings: ReviewConfig,
}

impl ReviewService {
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

    /// 为新提交分配评审人并创建待评审记录
    pub async fn assign_reviewers(
        &self,
        submission: &Submission,
        assignment: &Assignment,
    ) -> Result<Vec<Review>> {
        assign::assign_reviewers(self, submission, assignment).await
    }

    /// 记录一次评审提交
    pub async fn record_review(&self, req: RecordReviewRequest) -> Result<Review> {
        record::record_review(self, req).await
    }
}
