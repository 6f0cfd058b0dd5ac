use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{PeerReviewError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::reviews::entities::Scores;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> std::result::Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填文本校验，返回去除首尾空白后的内容
pub fn require_text(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PeerReviewError::validation(format!("{field}不能为空")));
    }
    Ok(trimmed.to_string())
}

/// 可选文本：空白视为未填写
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 校验评分是否完整且在范围内
///
/// 要求：
/// - 评分标准的每一项都有分数
/// - 不包含评分标准之外的项
/// - 分数为有限数且在 [0, maxScore] 内，超出范围直接拒绝
pub fn validate_scores(assignment: &Assignment, scores: &Scores) -> Result<()> {
    for criterion in &assignment.rubric {
        let score = scores.get(&criterion.id).ok_or_else(|| {
            PeerReviewError::validation(format!("评分项 '{}' 未评分", criterion.title))
        })?;

        if !score.is_finite() {
            return Err(PeerReviewError::validation(format!(
                "评分项 '{}' 的分数无效",
                criterion.title
            )));
        }

        if *score < 0.0 || *score > f64::from(criterion.max_score) {
            return Err(PeerReviewError::validation(format!(
                "评分项 '{}' 的分数 {} 超出范围 [0, {}]",
                criterion.title, score, criterion.max_score
            )));
        }
    }

    if let Some(unknown) = scores
        .keys()
        .find(|id| assignment.criterion(id).is_none())
    {
        return Err(PeerReviewError::validation(format!(
            "未知的评分项: '{unknown}'"
        )));
    }

    Ok(())
}
