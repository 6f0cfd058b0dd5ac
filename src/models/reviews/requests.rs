use serde::Deserialize;
use ts_rs::TS;

use super::entities::Scores;

/// 提交评审请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct RecordReviewRequest {
    pub submission_id: String,
    pub reviewer_id: String,
    pub scores: Scores,
    pub comment: Option<String>,
}
