use serde::Serialize;
use ts_rs::TS;

use super::entities::Review;
use crate::models::assignments::entities::RubricCriterion;

/// "我的评审任务" 列表项
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct AssignedReviewItem {
    pub review: Review,
    pub assignment_id: String,
    pub assignment_title: String,
    pub submission_content: String,
    pub rubric: Vec<RubricCriterion>,
}
