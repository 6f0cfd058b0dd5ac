use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 评分标准中的一项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct RubricCriterion {
    pub id: String,
    pub title: String,
    // 满分，正整数
    pub max_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(default)]
    pub description: String,
    // 评分标准，顺序即展示顺序
    pub rubric: Vec<RubricCriterion>,
    // 创建时间
    pub created_at: DateTime<Utc>,
    // 每份提交分配的评审人数，缺省或非正数时使用配置默认值
    #[serde(default)]
    pub reviewers_per_submission: i64,
}

impl Assignment {
    /// 实际生效的评审人数
    pub fn effective_reviewers_per_submission(&self, default: u32) -> usize {
        if self.reviewers_per_submission > 0 {
            self.reviewers_per_submission as usize
        } else {
            default as usize
        }
    }

    pub fn criterion(&self, criterion_id: &str) -> Option<&RubricCriterion> {
        self.rubric.iter().find(|c| c.id == criterion_id)
    }
}
