use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

use super::entities::Submission;
use crate::models::reviews::entities::Review;

/// 创建提交的结果：提交本身以及为它分配的待评审记录
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionWithReviews {
    pub submission: Submission,
    pub reviews: Vec<Review>,
}

/// "我的提交" 列表项
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct MySubmissionItem {
    pub submission: Submission,
    pub assignment_title: String,
    pub reviews_assigned: usize,
    pub reviews_done: usize,
    /// 已完成评审在每个评分项上的平均分
    pub average_scores: BTreeMap<String, f64>,
}
