//! 评审人自动分配

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::ReviewService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::reviews::entities::Review;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;
use crate::utils::generate_id;

/// 候选评审人：除作者外的所有学生，按 ID 去重，保持原有顺序
pub fn eligible_reviewers<'a>(submission: &Submission, users: &'a [User]) -> Vec<&'a User> {
    let mut seen = HashSet::new();
    users
        .iter()
        .filter(|u| u.is_student() && u.id != submission.author_id)
        .filter(|u| seen.insert(u.id.clone()))
        .collect()
}

/// 从候选人中随机选出 `target` 位评审人
///
/// 打乱后取前 N 个，保证终止且不重复；候选人不足时全部选中。
pub fn select_reviewers<'a, R: Rng + ?Sized>(
    mut pool: Vec<&'a User>,
    target: usize,
    rng: &mut R,
) -> Vec<&'a User> {
    pool.shuffle(rng);
    pool.truncate(target);
    pool
}

/// 为提交生成待评审占位记录
///
/// `existing_reviews` 只用于审计日志，不参与去重：每份提交只分配一次。
pub fn build_placeholders<R: Rng + ?Sized>(
    submission: &Submission,
    assignment: &Assignment,
    users: &[User],
    existing_reviews: &[Review],
    default_reviewers: u32,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Review> {
    let already_assigned = existing_reviews
        .iter()
        .filter(|r| r.submission_id == submission.id)
        .count();
    if already_assigned > 0 {
        warn!(
            "Submission {} already has {} review(s) before assignment",
            submission.id, already_assigned
        );
    }

    let pool = eligible_reviewers(submission, users);
    let target = assignment
        .effective_reviewers_per_submission(default_reviewers)
        .min(pool.len());

    if target == 0 {
        debug!(
            "No eligible reviewers for submission {} (author {})",
            submission.id, submission.author_id
        );
        return Vec::new();
    }

    select_reviewers(pool, target, rng)
        .into_iter()
        .map(|reviewer| Review::placeholder(generate_id(), &submission.id, &reviewer.id, now))
        .collect()
}

pub async fn assign_reviewers(
    service: &ReviewService,
    submission: &Submission,
    assignment: &Assignment,
) -> Result<Vec<Review>> {
    let storage = service.storage();

    let users = storage.list_users().await?;
    let existing_reviews = storage.list_reviews_by_submission(&submission.id).await?;

    let placeholders = {
        let mut rng = rand::rng();
        build_placeholders(
            submission,
            assignment,
            &users,
            &existing_reviews,
            service.settings().default_reviewers_per_submission,
            &mut rng,
            Utc::now(),
        )
    };

    let placeholders = storage.insert_reviews(placeholders).await?;
    info!(
        "Assigned {} reviewer(s) to submission {}",
        placeholders.len(),
        submission.id
    );

    Ok(placeholders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::RubricCriterion;
    use crate::models::reviews::entities::ReviewStatus;
    use crate::models::users::entities::UserRole;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn user(id: &str, role: UserRole) -> User {
        User {
            id: id.into(),
            name: id.to_uppercase(),
            role,
            email: format!("{id}@example.com"),
        }
    }

    fn assignment(reviewers: i64) -> Assignment {
        Assignment {
            id: "a1".into(),
            title: "Essay".into(),
            description: String::new(),
            rubric: vec![RubricCriterion {
                id: "c1".into(),
                title: "Clarity".into(),
                max_score: 5,
            }],
            created_at: Utc::now(),
            reviewers_per_submission: reviewers,
        }
    }

    fn submission(author: &str) -> Submission {
        Submission {
            id: "s1".into(),
            assignment_id: "a1".into(),
            author_id: author.into(),
            content: "My essay".into(),
            version: 1,
            created_at: Utc::now(),
        }
    }

    fn classroom(students: usize) -> Vec<User> {
        let mut users = vec![user("t1", UserRole::Teacher), user("author", UserRole::Student)];
        users.extend((0..students).map(|i| user(&format!("st{i}"), UserRole::Student)));
        users
    }

    fn place(assignment: &Assignment, users: &[User], seed: u64) -> Vec<Review> {
        let mut rng = StdRng::seed_from_u64(seed);
        build_placeholders(
            &submission("author"),
            assignment,
            users,
            &[],
            2,
            &mut rng,
            Utc::now(),
        )
    }

    #[test]
    fn test_two_of_three_eligible() {
        let users = classroom(3);
        for seed in 0..20 {
            let reviews = place(&assignment(2), &users, seed);
            assert_eq!(reviews.len(), 2);
            assert_ne!(reviews[0].reviewer_id, reviews[1].reviewer_id);
            for review in &reviews {
                assert_ne!(review.reviewer_id, "author");
                assert_ne!(review.reviewer_id, "t1");
                assert_eq!(review.status, ReviewStatus::Pending);
                assert!(review.scores.is_none());
                assert!(review.comment.is_none());
                assert_eq!(review.submission_id, "s1");
            }
        }
    }

    #[test]
    fn test_single_eligible_degrades_gracefully() {
        let reviews = place(&assignment(2), &classroom(1), 7);
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].reviewer_id, "st0");
    }

    #[test]
    fn test_no_eligible_reviewers() {
        let reviews = place(&assignment(2), &classroom(0), 7);
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_unset_count_uses_default() {
        let reviews = place(&assignment(0), &classroom(5), 3);
        assert_eq!(reviews.len(), 2);

        let reviews = place(&assignment(-1), &classroom(5), 3);
        assert_eq!(reviews.len(), 2);

        let reviews = place(&assignment(4), &classroom(5), 3);
        assert_eq!(reviews.len(), 4);
    }

    #[test]
    fn test_duplicate_user_ids_are_selected_once() {
        let mut users = classroom(1);
        users.push(user("st0", UserRole::Student));
        users.push(user("st0", UserRole::Student));

        let reviews = place(&assignment(3), &users, 11);
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_selection_is_deterministic_for_seed() {
        let users = classroom(6);
        let first: Vec<String> = place(&assignment(3), &users, 42)
            .into_iter()
            .map(|r| r.reviewer_id)
            .collect();
        let second: Vec<String> = place(&assignment(3), &users, 42)
            .into_iter()
            .map(|r| r.reviewer_id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_eligible_student_can_be_chosen() {
        let users = classroom(4);
        let mut chosen = HashSet::new();
        for seed in 0..200 {
            for review in place(&assignment(1), &users, seed) {
                chosen.insert(review.reviewer_id);
            }
        }
        assert_eq!(chosen.len(), 4);
    }
}
