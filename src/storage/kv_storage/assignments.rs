//! 作业存储操作

use super::{KvStorage, keys};
use crate::errors::{PeerReviewError, Result};
use crate::models::assignments::{
    entities::{Assignment, RubricCriterion},
    requests::CreateAssignmentRequest,
};
use crate::utils::generate_id;

impl KvStorage {
    /// 创建作业，调用方负责校验标题等文本字段
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let rubric = req
            .rubric
            .into_iter()
            .map(|c| -> Result<RubricCriterion> {
                let max_score = u32::try_from(c.max_score)
                    .ok()
                    .filter(|&max| max >= 1)
                    .ok_or_else(|| {
                        PeerReviewError::validation(format!(
                            "评分项 '{}' 的满分必须为正整数: {}",
                            c.title, c.max_score
                        ))
                    })?;
                Ok(RubricCriterion {
                    id: generate_id(),
                    title: c.title,
                    max_score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let assignment = Assignment {
            id: generate_id(),
            title: req.title,
            description: req.description.unwrap_or_default(),
            rubric,
            created_at: chrono::Utc::now(),
            reviewers_per_submission: req.reviewers_per_submission.unwrap_or(0),
        };

        let mut state = self.state.write().await;
        let mut assignments = state.assignments.clone();
        assignments.push(assignment.clone());
        self.persist(keys::ASSIGNMENTS, &assignments).await?;
        state.assignments = assignments;

        Ok(assignment)
    }

    /// 列出作业
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        Ok(self.state.read().await.assignments.clone())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let state = self.state.read().await;
        Ok(state.assignments.iter().find(|a| a.id == id).cloned())
    }
}
