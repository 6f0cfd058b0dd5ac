use crate::errors::{PeerReviewError, Result};
use crate::store::traits::KeyValueStore;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStoreFuture = Pin<Box<dyn Future<Output = Result<Box<dyn KeyValueStore>>> + Send>>;
pub type StoreConstructor = Arc<dyn Fn() -> BoxedStoreFuture + Send + Sync>;

static STORE_REGISTRY: Lazy<RwLock<HashMap<String, StoreConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_store_plugin<S: Into<String>>(name: S, constructor: StoreConstructor) {
    let name = name.into();
    let mut registry = STORE_REGISTRY
        .write()
        .expect("Store registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_store_plugin(name: &str) -> Option<StoreConstructor> {
    STORE_REGISTRY
        .read()
        .expect("Store registry lock poisoned")
        .get(name)
        .cloned()
}

/// 将后端的异步构造函数包装为注册表使用的构造器
pub fn constructor_for<S, F, Fut>(open: F) -> StoreConstructor
where
    S: KeyValueStore + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<S>> + Send + 'static,
{
    Arc::new(move || -> BoxedStoreFuture {
        let fut = open();
        Box::pin(async move {
            let store = fut.await?;
            let boxed: Box<dyn KeyValueStore> = Box::new(store);
            Ok::<_, PeerReviewError>(boxed)
        })
    })
}

/// 注册所有内置后端
pub fn register_builtin_store_plugins() {
    crate::store::kv_store::moka::register();
    crate::store::kv_store::file::register();
    crate::store::kv_store::redis::register();
}

pub fn debug_store_registry() {
    let registry = STORE_REGISTRY
        .read()
        .expect("Store registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No store plugins registered.");
    } else {
        tracing::debug!("Registered store plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_plugins_are_registered() {
        register_builtin_store_plugins();
        assert!(get_store_plugin("moka").is_some());
        assert!(get_store_plugin("file").is_some());
        assert!(get_store_plugin("redis").is_some());
        assert!(get_store_plugin("unknown").is_none());
    }

    #[tokio::test]
    async fn test_constructor_builds_memory_store() {
        register_builtin_store_plugins();
        let constructor = get_store_plugin("moka").expect("moka registered");
        let store = constructor().await.expect("memory store opens");
        assert_eq!(store.backend_name(), "moka");
    }
}
