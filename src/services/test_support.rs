//! 服务层测试夹具

use std::sync::Arc;

use crate::models::assignments::{
    entities::Assignment,
    requests::{CreateAssignmentRequest, RubricCriterionInput},
};
use crate::models::submissions::{entities::Submission, requests::CreateSubmissionRequest};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use crate::storage::{Storage, create_storage};
use crate::store::KeyValueStore;
use crate::store::kv_store::moka::MokaStore;

pub(crate) struct Classroom {
    pub store: Arc<dyn KeyValueStore>,
    pub storage: Arc<dyn Storage>,
    pub teacher: User,
    /// students[0] 是 `submission` 的作者
    pub students: Vec<User>,
    pub assignment: Assignment,
    pub submission: Submission,
}

pub(crate) async fn empty_storage() -> (Arc<dyn KeyValueStore>, Arc<dyn Storage>) {
    let store: Arc<dyn KeyValueStore> = Arc::new(MokaStore::with_capacity(64));
    let storage = create_storage(store.clone()).await.unwrap();
    (store, storage)
}

pub(crate) async fn add_user(storage: &Arc<dyn Storage>, name: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            name: name.to_string(),
            role,
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .unwrap()
}

pub(crate) fn essay_request(reviewers: Option<i64>) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        title: "Essay".into(),
        description: Some("Write about ownership".into()),
        rubric: vec![
            RubricCriterionInput {
                title: "Clarity".into(),
                max_score: 5,
            },
            RubricCriterionInput {
                title: "Depth".into(),
                max_score: 10,
            },
        ],
        reviewers_per_submission: reviewers,
    }
}

/// 一位教师、`students` 位学生（至少一位）、一份作业和 students[0] 的一份提交，尚未分配评审
pub(crate) async fn classroom(students: usize) -> Classroom {
    let (store, storage) = empty_storage().await;
    let teacher = add_user(&storage, "Teacher", UserRole::Teacher).await;

    let mut members = Vec::new();
    for i in 0..students.max(1) {
        members.push(add_user(&storage, &format!("Student{i}"), UserRole::Student).await);
    }

    let assignment = storage.create_assignment(essay_request(Some(2))).await.unwrap();
    let submission = storage
        .create_submission(
            &members[0].id,
            CreateSubmissionRequest {
                assignment_id: assignment.id.clone(),
                content: "Borrowing is great".into(),
            },
        )
        .await
        .unwrap();

    Classroom {
        store,
        storage,
        teacher,
        students: members,
        assignment,
        submission,
    }
}
