//! 用户存储操作

use super::{KvStorage, keys};
use crate::errors::Result;
use crate::models::users::{entities::User, requests::CreateUserRequest};
use crate::utils::generate_id;

impl KvStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let user = User {
            id: generate_id(),
            name: req.name,
            role: req.role,
            email: req.email,
        };

        let mut state = self.state.write().await;
        let mut users = state.users.clone();
        users.push(user.clone());
        self.persist(keys::USERS, &users).await?;
        state.users = users;

        Ok(user)
    }

    /// 列出所有用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    /// 统计用户数
    pub async fn count_users_impl(&self) -> Result<usize> {
        Ok(self.state.read().await.users.len())
    }
}
