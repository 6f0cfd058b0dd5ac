use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// 评分：评分项 ID -> 分数
pub type Scores = BTreeMap<String, f64>;

// 评审状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewStatus {
    Pending, // 已分配，等待评审
    Done,    // 评审已提交
}

/// 评审记录
///
/// 提交时为每位被分配的评审人创建一条 `pending` 占位记录（分数和评语为空），
/// 评审人提交后转为 `done`。`done` 状态下 `scores` 覆盖作业评分标准的每一项。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: String,
    pub submission_id: String,
    pub reviewer_id: String,
    pub scores: Option<Scores>,
    pub comment: Option<String>,
    pub status: ReviewStatus,
    pub assigned_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Review {
    /// 创建待评审占位记录
    pub fn placeholder(
        id: String,
        submission_id: &str,
        reviewer_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            submission_id: submission_id.to_string(),
            reviewer_id: reviewer_id.to_string(),
            scores: None,
            comment: None,
            status: ReviewStatus::Pending,
            assigned_at,
            submitted_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReviewStatus::Pending
    }

    pub fn is_done(&self) -> bool {
        self.status == ReviewStatus::Done
    }

    /// 是否属于指定的 (提交, 评审人) 组合
    pub fn matches(&self, submission_id: &str, reviewer_id: &str) -> bool {
        self.submission_id == submission_id && self.reviewer_id == reviewer_id
    }

    /// 写入评审结果并标记为完成，其余字段保持不变
    pub fn complete(&mut self, scores: Scores, comment: Option<String>, now: DateTime<Utc>) {
        self.scores = Some(scores);
        self.comment = comment;
        self.status = ReviewStatus::Done;
        self.submitted_at = Some(now);
    }
}
