//! 基于文件存储的完整互评流程：重启后数据仍然可见

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use peer_review::config::ReviewConfig;
use peer_review::models::assignments::requests::{CreateAssignmentRequest, RubricCriterionInput};
use peer_review::models::reviews::entities::{ReviewStatus, Scores};
use peer_review::models::reviews::requests::RecordReviewRequest;
use peer_review::models::submissions::requests::CreateSubmissionRequest;
use peer_review::models::users::entities::UserRole;
use peer_review::models::users::requests::CreateUserRequest;
use peer_review::services::{
    AssignmentService, DashboardService, ReviewService, SessionService, SubmissionService,
};
use peer_review::storage::{Storage, create_storage};
use peer_review::store::KeyValueStore;
use peer_review::store::kv_store::file::FileStore;

fn temp_profile_dir() -> PathBuf {
    std::env::temp_dir().join(format!("peer-review-flow-{}", uuid::Uuid::new_v4()))
}

async fn open(dir: &PathBuf) -> Arc<dyn Storage> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open_at(dir).await.unwrap());
    create_storage(store).await.unwrap()
}

#[tokio::test]
async fn test_full_review_cycle_survives_restart() {
    let dir = temp_profile_dir();
    let settings = ReviewConfig::default();

    let (submission_id, reviewer_ids, criterion_ids) = {
        let storage = open(&dir).await;

        let mut ids = Vec::new();
        for (name, role) in [
            ("Teacher", UserRole::Teacher),
            ("Alice", UserRole::Student),
            ("Bob", UserRole::Student),
            ("Carol", UserRole::Student),
        ] {
            let user = storage
                .create_user(CreateUserRequest {
                    name: name.to_string(),
                    role,
                    email: format!("{}@school.example", name.to_lowercase()),
                })
                .await
                .unwrap();
            ids.push(user.id);
        }

        let assignment = AssignmentService::with_settings(storage.clone(), settings.clone())
            .create_assignment(
                &ids[0],
                CreateAssignmentRequest {
                    title: "Lab report".into(),
                    description: None,
                    rubric: vec![
                        RubricCriterionInput {
                            title: "Method".into(),
                            max_score: 5,
                        },
                        RubricCriterionInput {
                            title: "Results".into(),
                            max_score: 5,
                        },
                    ],
                    reviewers_per_submission: Some(2),
                },
            )
            .await
            .unwrap();

        SessionService::new(storage.clone()).login(&ids[1]).await.unwrap();

        let created = SubmissionService::with_settings(storage.clone(), settings.clone())
            .create_submission(
                &ids[1],
                CreateSubmissionRequest {
                    assignment_id: assignment.id.clone(),
                    content: "We measured things.".into(),
                },
            )
            .await
            .unwrap();

        let reviewers: HashSet<String> =
            created.reviews.iter().map(|r| r.reviewer_id.clone()).collect();
        assert_eq!(reviewers, HashSet::from([ids[2].clone(), ids[3].clone()]));

        let criteria: Vec<String> = assignment.rubric.iter().map(|c| c.id.clone()).collect();
        (created.submission.id, reviewers, criteria)
    };

    // 重新打开同一个 profile 目录
    let storage = open(&dir).await;
    let current = SessionService::new(storage.clone()).current_user().await.unwrap();
    assert_eq!(current.map(|u| u.name), Some("Alice".to_string()));

    let pending = storage.list_reviews_by_submission(&submission_id).await.unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|r| r.status == ReviewStatus::Pending));

    let reviews = ReviewService::with_settings(storage.clone(), settings);
    for reviewer in &reviewer_ids {
        reviews
            .record_review(RecordReviewRequest {
                submission_id: submission_id.clone(),
                reviewer_id: reviewer.clone(),
                scores: Scores::from([
                    (criterion_ids[0].clone(), 4.0),
                    (criterion_ids[1].clone(), 5.0),
                ]),
                comment: Some("Solid".into()),
            })
            .await
            .unwrap();
    }

    let reopened = open(&dir).await;
    let done = reopened.list_reviews_by_submission(&submission_id).await.unwrap();
    assert_eq!(done.len(), 2);
    assert!(done.iter().all(|r| r.status == ReviewStatus::Done));

    let summary = DashboardService::new(reopened).progress().await.unwrap();
    assert_eq!(summary.done_reviews, 2);
    assert_eq!(summary.pending_reviews, 0);

    let _ = std::fs::remove_dir_all(&dir);
}
