//! 提交存储操作

use super::{KvStorage, keys};
use crate::errors::Result;
use crate::models::submissions::{entities::Submission, requests::CreateSubmissionRequest};
use crate::utils::generate_id;

impl KvStorage {
    /// 创建提交（自动计算版本号）
    pub async fn create_submission_impl(
        &self,
        author_id: &str,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let mut state = self.state.write().await;

        // 查询当前最大版本号
        let max_version = state
            .submissions
            .iter()
            .filter(|s| s.assignment_id == req.assignment_id && s.author_id == author_id)
            .map(|s| s.version)
            .max()
            .unwrap_or(0);

        let submission = Submission {
            id: generate_id(),
            assignment_id: req.assignment_id,
            author_id: author_id.to_string(),
            content: req.content,
            version: max_version + 1,
            created_at: chrono::Utc::now(),
        };

        let mut submissions = state.submissions.clone();
        submissions.push(submission.clone());
        self.persist(keys::SUBMISSIONS, &submissions).await?;
        state.submissions = submissions;

        Ok(submission)
    }

    /// 列出提交
    pub async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        Ok(self.state.read().await.submissions.clone())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: &str) -> Result<Option<Submission>> {
        let state = self.state.read().await;
        Ok(state.submissions.iter().find(|s| s.id == id).cloned())
    }

    /// 列出某学生的提交，最新的在前
    pub async fn list_submissions_by_author_impl(
        &self,
        author_id: &str,
    ) -> Result<Vec<Submission>> {
        let state = self.state.read().await;
        let mut items: Vec<Submission> = state
            .submissions
            .iter()
            .filter(|s| s.author_id == author_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
