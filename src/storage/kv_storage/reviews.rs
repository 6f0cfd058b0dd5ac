//! 评审存储操作

use super::{KvStorage, keys};
use crate::errors::Result;
use crate::models::reviews::entities::{Review, ReviewStatus};

impl KvStorage {
    /// 追加评审记录，不修改已有记录
    pub async fn insert_reviews_impl(&self, new_reviews: Vec<Review>) -> Result<Vec<Review>> {
        if new_reviews.is_empty() {
            return Ok(new_reviews);
        }

        let mut state = self.state.write().await;
        let mut reviews = state.reviews.clone();
        reviews.extend(new_reviews.iter().cloned());
        self.persist(keys::REVIEWS, &reviews).await?;
        state.reviews = reviews;

        Ok(new_reviews)
    }

    /// 按 ID 整体替换评审记录
    pub async fn update_review_impl(&self, review: Review) -> Result<Option<Review>> {
        let mut state = self.state.write().await;
        let Some(index) = state.reviews.iter().position(|r| r.id == review.id) else {
            return Ok(None);
        };

        let mut reviews = state.reviews.clone();
        reviews[index] = review.clone();
        self.persist(keys::REVIEWS, &reviews).await?;
        state.reviews = reviews;

        Ok(Some(review))
    }

    /// 列出评审
    pub async fn list_reviews_impl(&self) -> Result<Vec<Review>> {
        Ok(self.state.read().await.reviews.clone())
    }

    /// 列出某提交的评审
    pub async fn list_reviews_by_submission_impl(
        &self,
        submission_id: &str,
    ) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.submission_id == submission_id)
            .cloned()
            .collect())
    }

    /// 列出分配给某评审人的评审
    pub async fn list_reviews_by_reviewer_impl(&self, reviewer_id: &str) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .iter()
            .filter(|r| r.reviewer_id == reviewer_id)
            .cloned()
            .collect())
    }

    /// 查找 (提交, 评审人, 状态) 对应的第一条评审
    pub async fn find_review_impl(
        &self,
        submission_id: &str,
        reviewer_id: &str,
        status: ReviewStatus,
    ) -> Result<Option<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .iter()
            .find(|r| r.matches(submission_id, reviewer_id) && r.status == status)
            .cloned())
    }
}
