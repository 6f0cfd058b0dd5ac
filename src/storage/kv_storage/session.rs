//! 当前会话用户

use super::{KvStorage, keys};
use crate::errors::Result;
use crate::models::users::entities::User;

impl KvStorage {
    pub async fn get_current_user_impl(&self) -> Result<Option<User>> {
        Ok(self.state.read().await.current_user.clone())
    }

    pub async fn set_current_user_impl(&self, user: Option<User>) -> Result<()> {
        let mut state = self.state.write().await;
        self.persist(keys::CURRENT_USER, &user).await?;
        state.current_user = user;
        Ok(())
    }
}
