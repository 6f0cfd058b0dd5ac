use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    // 提交者，必须是学生
    pub author_id: String,
    pub content: String,
    // 同一学生同一作业的提交版本，从 1 开始
    pub version: i32,
    pub created_at: DateTime<Utc>,
}
