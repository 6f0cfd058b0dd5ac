use uuid::Uuid;

/// 生成不透明的唯一 ID
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
