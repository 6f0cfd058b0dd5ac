//! 持久化键值存储适配层
//!
//! 以字符串键保存 JSON 文档，后端通过插件注册表按名称选择。

pub mod kv_store;
pub mod register;
pub mod traits;

pub use traits::KeyValueStore;

/// 声明一个存储后端插件
///
/// 生成 `register()` 函数，将后端的 `open()` 构造器注册到全局注册表。
#[macro_export]
macro_rules! declare_store_plugin {
    ($name:expr, $ty:ty) => {
        pub const PLUGIN_NAME: &str = $name;

        pub fn register() {
            $crate::store::register::register_store_plugin(
                PLUGIN_NAME,
                $crate::store::register::constructor_for(<$ty>::open),
            );
        }
    };
}
