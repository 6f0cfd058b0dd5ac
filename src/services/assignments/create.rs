use tracing::info;

use super::AssignmentService;
use crate::errors::{PeerReviewError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, RubricCriterionInput},
};
use crate::utils::validate::{optional_text, require_text};

pub async fn create_assignment(
    service: &AssignmentService,
    teacher_id: &str,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let storage = service.storage();

    // 只有教师可以创建作业
    let teacher = storage
        .get_user_by_id(teacher_id)
        .await?
        .ok_or_else(|| PeerReviewError::not_found(format!("用户不存在: {teacher_id}")))?;
    if !teacher.is_teacher() {
        return Err(PeerReviewError::authorization("只有教师可以创建作业"));
    }

    let title = require_text(&req.title, "作业标题")?;

    if req.rubric.is_empty() {
        return Err(PeerReviewError::validation("评分标准至少需要一项"));
    }

    let rubric = req
        .rubric
        .into_iter()
        .map(|c| -> Result<RubricCriterionInput> {
            let title = require_text(&c.title, "评分项标题")?;
            if c.max_score < 1 || c.max_score > i64::from(u32::MAX) {
                return Err(PeerReviewError::validation(format!(
                    "评分项 '{title}' 的满分必须为正整数"
                )));
            }
            Ok(RubricCriterionInput {
                title,
                max_score: c.max_score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // 评审人数未设置或非正数时使用默认值
    let reviewers_per_submission = req
        .reviewers_per_submission
        .filter(|n| *n > 0)
        .unwrap_or_else(|| i64::from(service.settings().default_reviewers_per_submission));

    let assignment = storage
        .create_assignment(CreateAssignmentRequest {
            title,
            description: optional_text(req.description.as_deref()),
            rubric,
            reviewers_per_submission: Some(reviewers_per_submission),
        })
        .await?;

    info!(
        "Assignment {} created by {} with {} rubric criteria",
        assignment.id,
        teacher.id,
        assignment.rubric.len()
    );

    Ok(assignment)
}
