use tracing::info;

use super::SubmissionService;
use crate::errors::{PeerReviewError, Result};
use crate::models::submissions::{
    requests::CreateSubmissionRequest, responses::SubmissionWithReviews,
};
use crate::utils::validate::require_text;

pub async fn create_submission(
    service: &SubmissionService,
    author_id: &str,
    req: CreateSubmissionRequest,
) -> Result<SubmissionWithReviews> {
    let storage = service.storage();

    // 提交者必须是学生
    let author = storage
        .get_user_by_id(author_id)
        .await?
        .ok_or_else(|| PeerReviewError::not_found(format!("用户不存在: {author_id}")))?;
    if !author.is_student() {
        return Err(PeerReviewError::authorization("只有学生可以提交作业"));
    }

    let content = require_text(&req.content, "提交内容")?;

    let assignment = storage
        .get_assignment_by_id(&req.assignment_id)
        .await?
        .ok_or_else(|| PeerReviewError::not_found(format!("作业不存在: {}", req.assignment_id)))?;

    let submission = storage
        .create_submission(
            &author.id,
            CreateSubmissionRequest {
                assignment_id: assignment.id.clone(),
                content,
            },
        )
        .await?;

    info!(
        "Submission {} (version {}) created by {} for assignment {}",
        submission.id, submission.version, author.id, assignment.id
    );

    let reviews = service
        .review_service()
        .assign_reviewers(&submission, &assignment)
        .await?;

    Ok(SubmissionWithReviews {
        submission,
        reviews,
    })
}
