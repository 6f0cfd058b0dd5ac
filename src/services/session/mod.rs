//! 会话：选择当前用户（演示系统不做身份认证）

use std::sync::Arc;
use tracing::info;

use crate::errors::{PeerReviewError, Result};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct SessionService {
    storage: Arc<dyn Storage>,
}

impl SessionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 以指定用户身份登录
    pub async fn login(&self, user_id: &str) -> Result<User> {
        let user = self
            .storage
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| PeerReviewError::not_found(format!("用户不存在: {user_id}")))?;

        self.storage.set_current_user(Some(user.clone())).await?;
        info!("User {} ({}) logged in as {}", user.name, user.id, user.role);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.storage.set_current_user(None).await
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        self.storage.get_current_user().await
    }
}
