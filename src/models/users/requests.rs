use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

/// 创建用户请求（仅用于演示数据初始化）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub role: UserRole,
    pub email: String,
}
