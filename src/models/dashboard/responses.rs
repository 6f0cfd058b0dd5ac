use serde::Serialize;
use ts_rs::TS;

/// 整体进度统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ProgressSummary {
    pub teachers: usize,
    pub students: usize,
    pub assignments: usize,
    pub submissions: usize,
    pub pending_reviews: usize,
    pub done_reviews: usize,
}
