//! 评审结果记录与占位记录匹配

use chrono::Utc;
use tracing::{info, warn};

use super::ReviewService;
use crate::config::ResubmissionPolicy;
use crate::errors::{PeerReviewError, Result};
use crate::models::reviews::entities::{Review, ReviewStatus};
use crate::models::reviews::requests::RecordReviewRequest;
use crate::utils::generate_id;
use crate::utils::validate::{optional_text, validate_scores};

pub async fn record_review(service: &ReviewService, req: RecordReviewRequest) -> Result<Review> {
    let storage = service.storage();

    // 获取提交与作业
    let submission = storage
        .get_submission_by_id(&req.submission_id)
        .await?
        .ok_or_else(|| PeerReviewError::not_found(format!("提交不存在: {}", req.submission_id)))?;

    let assignment = storage
        .get_assignment_by_id(&submission.assignment_id)
        .await?
        .ok_or_else(|| {
            PeerReviewError::not_found(format!("作业不存在: {}", submission.assignment_id))
        })?;

    if storage.get_user_by_id(&req.reviewer_id).await?.is_none() {
        return Err(PeerReviewError::not_found(format!(
            "评审人不存在: {}",
            req.reviewer_id
        )));
    }

    // 不允许评审自己的提交
    if submission.author_id == req.reviewer_id {
        return Err(PeerReviewError::authorization("不能评审自己的提交"));
    }

    validate_scores(&assignment, &req.scores)?;

    let comment = optional_text(req.comment.as_deref());
    let now = Utc::now();

    // 优先匹配待评审占位记录
    if let Some(mut pending) = storage
        .find_review(&req.submission_id, &req.reviewer_id, ReviewStatus::Pending)
        .await?
    {
        pending.complete(req.scores, comment, now);
        let updated = storage
            .update_review(pending)
            .await?
            .ok_or_else(|| PeerReviewError::not_found("待评审记录已不存在"))?;
        info!(
            "Review {} completed by {} for submission {}",
            updated.id, updated.reviewer_id, updated.submission_id
        );
        return Ok(updated);
    }

    // 没有占位记录：按重复评审策略处理已完成的评审
    let existing_done = storage
        .find_review(&req.submission_id, &req.reviewer_id, ReviewStatus::Done)
        .await?;

    match (existing_done, service.settings().resubmission) {
        (Some(mut done), ResubmissionPolicy::Overwrite) => {
            done.complete(req.scores, comment, now);
            let updated = storage
                .update_review(done)
                .await?
                .ok_or_else(|| PeerReviewError::not_found("已完成的评审记录已不存在"))?;
            info!(
                "Review {} overwritten by {} for submission {}",
                updated.id, updated.reviewer_id, updated.submission_id
            );
            Ok(updated)
        }
        (Some(done), ResubmissionPolicy::Reject) => Err(PeerReviewError::conflict(format!(
            "已提交过该评审: {}",
            done.id
        ))),
        (existing, _) => {
            if existing.is_some() {
                warn!(
                    "Appending duplicate review by {} for submission {}",
                    req.reviewer_id, req.submission_id
                );
            } else {
                warn!(
                    "No review assigned to {} for submission {}, recording unassigned review",
                    req.reviewer_id, req.submission_id
                );
            }

            let review = Review {
                id: generate_id(),
                submission_id: req.submission_id,
                reviewer_id: req.reviewer_id,
                scores: Some(req.scores),
                comment,
                status: ReviewStatus::Done,
                assigned_at: now,
                submitted_at: Some(now),
            };
            let mut inserted = storage.insert_reviews(vec![review]).await?;
            inserted
                .pop()
                .ok_or_else(|| PeerReviewError::store_operation("评审记录写入失败"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReviewConfig;
    use crate::models::reviews::entities::Scores;
    use crate::services::test_support::{Classroom, classroom};

    fn scores(c1: f64, c2: f64, room: &Classroom) -> Scores {
        Scores::from([
            (room.assignment.rubric[0].id.clone(), c1),
            (room.assignment.rubric[1].id.clone(), c2),
        ])
    }

    fn request(room: &Classroom, reviewer: &str, s: Scores) -> RecordReviewRequest {
        RecordReviewRequest {
            submission_id: room.submission.id.clone(),
            reviewer_id: reviewer.to_string(),
            scores: s,
            comment: Some("Well argued".into()),
        }
    }

    fn service(room: &Classroom, policy: ResubmissionPolicy) -> ReviewService {
        ReviewService::with_settings(
            room.storage.clone(),
            ReviewConfig {
                default_reviewers_per_submission: 2,
                resubmission: policy,
            },
        )
    }

    #[tokio::test]
    async fn test_pending_placeholder_is_updated_in_place() {
        let room = classroom(3).await;
        let placeholder = room
            .storage
            .insert_reviews(vec![Review::placeholder(
                "r1".into(),
                &room.submission.id,
                &room.students[1].id,
                Utc::now(),
            )])
            .await
            .unwrap()
            .remove(0);
        let other = room
            .storage
            .insert_reviews(vec![Review::placeholder(
                "r2".into(),
                &room.submission.id,
                &room.students[2].id,
                Utc::now(),
            )])
            .await
            .unwrap()
            .remove(0);
        let before = room.storage.list_reviews().await.unwrap().len();

        let svc = service(&room, ResubmissionPolicy::Overwrite);
        let s = scores(4.0, 5.0, &room);
        let review = svc
            .record_review(request(&room, &room.students[1].id, s.clone()))
            .await
            .unwrap();

        assert_eq!(review.id, placeholder.id);
        assert_eq!(review.status, ReviewStatus::Done);
        assert_eq!(review.scores, Some(s));
        assert_eq!(review.comment.as_deref(), Some("Well argued"));
        assert_eq!(review.assigned_at, placeholder.assigned_at);
        assert!(review.submitted_at.is_some());

        let reviews = room.storage.list_reviews().await.unwrap();
        assert_eq!(reviews.len(), before);
        assert_eq!(reviews.iter().find(|r| r.id == other.id), Some(&other));
    }

    #[tokio::test]
    async fn test_missing_placeholder_inserts_done_review() {
        let room = classroom(3).await;
        let before = room.storage.list_reviews().await.unwrap().len();

        let svc = service(&room, ResubmissionPolicy::Overwrite);
        let review = svc
            .record_review(request(&room, &room.students[2].id, scores(1.0, 2.0, &room)))
            .await
            .unwrap();

        assert_eq!(review.status, ReviewStatus::Done);
        assert_eq!(review.reviewer_id, room.students[2].id);
        assert_eq!(room.storage.list_reviews().await.unwrap().len(), before + 1);
    }

    #[tokio::test]
    async fn test_resubmission_overwrites_by_default() {
        let room = classroom(3).await;
        let svc = service(&room, ResubmissionPolicy::Overwrite);
        let reviewer = room.students[1].id.clone();

        let first = svc
            .record_review(request(&room, &reviewer, scores(1.0, 1.0, &room)))
            .await
            .unwrap();
        let second = svc
            .record_review(request(&room, &reviewer, scores(3.0, 3.0, &room)))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        let reviews = room
            .storage
            .list_reviews_by_submission(&room.submission.id)
            .await
            .unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].scores, Some(scores(3.0, 3.0, &room)));
    }

    #[tokio::test]
    async fn test_resubmission_rejected_under_reject_policy() {
        let room = classroom(3).await;
        let svc = service(&room, ResubmissionPolicy::Reject);
        let reviewer = room.students[1].id.clone();

        svc.record_review(request(&room, &reviewer, scores(1.0, 1.0, &room)))
            .await
            .unwrap();
        let err = svc
            .record_review(request(&room, &reviewer, scores(2.0, 2.0, &room)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "E009");
        assert_eq!(room.storage.list_reviews().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resubmission_appends_under_append_policy() {
        let room = classroom(3).await;
        let svc = service(&room, ResubmissionPolicy::Append);
        let reviewer = room.students[1].id.clone();

        let first = svc
            .record_review(request(&room, &reviewer, scores(1.0, 1.0, &room)))
            .await
            .unwrap();
        let second = svc
            .record_review(request(&room, &reviewer, scores(2.0, 2.0, &room)))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(room.storage.list_reviews().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_scores_leave_reviews_untouched() {
        let room = classroom(3).await;
        room.storage
            .insert_reviews(vec![Review::placeholder(
                "r1".into(),
                &room.submission.id,
                &room.students[1].id,
                Utc::now(),
            )])
            .await
            .unwrap();
        let svc = service(&room, ResubmissionPolicy::Overwrite);

        let out_of_range = svc
            .record_review(request(&room, &room.students[1].id, scores(9.0, 1.0, &room)))
            .await
            .unwrap_err();
        assert_eq!(out_of_range.code(), "E005");

        let mut incomplete = scores(1.0, 1.0, &room);
        incomplete.remove(&room.assignment.rubric[1].id);
        let missing = svc
            .record_review(request(&room, &room.students[1].id, incomplete))
            .await
            .unwrap_err();
        assert_eq!(missing.code(), "E005");

        let reviews = room.storage.list_reviews().await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert!(reviews[0].is_pending());
    }

    #[tokio::test]
    async fn test_author_cannot_review_own_submission() {
        let room = classroom(3).await;
        let svc = service(&room, ResubmissionPolicy::Overwrite);
        let err = svc
            .record_review(request(&room, &room.submission.author_id, scores(1.0, 1.0, &room)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E008");
    }

    #[tokio::test]
    async fn test_unknown_submission_is_not_found() {
        let room = classroom(3).await;
        let svc = service(&room, ResubmissionPolicy::Overwrite);
        let mut req = request(&room, &room.students[1].id, scores(1.0, 1.0, &room));
        req.submission_id = "missing".into();
        let err = svc.record_review(req).await.unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
