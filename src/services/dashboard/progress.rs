use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use super::DashboardService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::dashboard::responses::ProgressSummary;
use crate::models::reviews::entities::Review;
use crate::models::reviews::responses::AssignedReviewItem;
use crate::models::submissions::responses::MySubmissionItem;

/// 已完成评审在每个评分项上的平均分
pub fn average_scores(
    assignment: Option<&Assignment>,
    reviews: &[&Review],
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for scores in reviews
        .iter()
        .filter(|r| r.is_done())
        .filter_map(|r| r.scores.as_ref())
    {
        for (criterion_id, score) in scores {
            let entry = sums.entry(criterion_id.clone()).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }

    // 只保留作业评分标准中的项
    sums.into_iter()
        .filter(|(id, _)| assignment.is_none_or(|a| a.criterion(id).is_some()))
        .map(|(id, (sum, count))| (id, sum / count as f64))
        .collect()
}

pub async fn my_submissions(
    service: &DashboardService,
    user_id: &str,
) -> Result<Vec<MySubmissionItem>> {
    let storage = service.storage();

    let submissions = storage.list_submissions_by_author(user_id).await?;
    let assignments: HashMap<String, Assignment> = storage
        .list_assignments()
        .await?
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();
    let reviews = storage.list_reviews().await?;

    let items = submissions
        .into_iter()
        .map(|submission| {
            let assignment = assignments.get(&submission.assignment_id);
            let related: Vec<&Review> = reviews
                .iter()
                .filter(|r| r.submission_id == submission.id)
                .collect();

            MySubmissionItem {
                assignment_title: assignment
                    .map(|a| a.title.clone())
                    .unwrap_or_else(|| "未知作业".to_string()),
                reviews_assigned: related.len(),
                reviews_done: related.iter().filter(|r| r.is_done()).count(),
                average_scores: average_scores(assignment, &related),
                submission,
            }
        })
        .collect();

    Ok(items)
}

pub async fn my_reviews(
    service: &DashboardService,
    user_id: &str,
) -> Result<Vec<AssignedReviewItem>> {
    let storage = service.storage();

    let mut reviews = storage.list_reviews_by_reviewer(user_id).await?;
    reviews.sort_by(|a, b| {
        b.is_pending()
            .cmp(&a.is_pending())
            .then(a.assigned_at.cmp(&b.assigned_at))
    });

    let mut items = Vec::with_capacity(reviews.len());
    for review in reviews {
        let Some(submission) = storage.get_submission_by_id(&review.submission_id).await? else {
            warn!(
                "Review {} references missing submission {}",
                review.id, review.submission_id
            );
            continue;
        };
        let assignment = storage.get_assignment_by_id(&submission.assignment_id).await?;

        items.push(AssignedReviewItem {
            assignment_id: submission.assignment_id.clone(),
            assignment_title: assignment
                .as_ref()
                .map(|a| a.title.clone())
                .unwrap_or_else(|| "未知作业".to_string()),
            rubric: assignment.map(|a| a.rubric).unwrap_or_default(),
            submission_content: submission.content,
            review,
        });
    }

    Ok(items)
}

pub async fn progress_summary(service: &DashboardService) -> Result<ProgressSummary> {
    let storage = service.storage();

    let users = storage.list_users().await?;
    let reviews = storage.list_reviews().await?;

    Ok(ProgressSummary {
        teachers: users.iter().filter(|u| u.is_teacher()).count(),
        students: users.iter().filter(|u| u.is_student()).count(),
        assignments: storage.list_assignments().await?.len(),
        submissions: storage.list_submissions().await?.len(),
        pending_reviews: reviews.iter().filter(|r| r.is_pending()).count(),
        done_reviews: reviews.iter().filter(|r| r.is_done()).count(),
    })
}
