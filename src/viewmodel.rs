use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::watch;

use crate::routes;

/// Data source the view-model fetches from
///
/// `path` is a request path such as `/pjson?name=pages/helloworld`. Handing
/// the view-model a trait object keeps it testable against a mock as well as
/// the real HTTP surface.
#[async_trait]
pub trait DataService: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<JsonValue>;
}

/// Lifecycle of a single fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(JsonValue),
    Failed(String),
}

/// View-model for the entry page
///
/// Starts in `Loading` and transitions exactly once per `load` call: to
/// `Loaded` with the fetched document, or to `Failed` with the error message.
/// The state is exposed through a watch channel so observers see every
/// transition. There is no retry or cancellation.
pub struct MainViewModel {
    metadata: watch::Sender<FetchState>,
}

impl MainViewModel {
    pub fn new() -> Self {
        let (metadata, _) = watch::channel(FetchState::Loading);
        Self { metadata }
    }

    /// Observe the metadata state
    pub fn metadata(&self) -> watch::Receiver<FetchState> {
        self.metadata.subscribe()
    }

    /// Fetch the named resource and transition out of `Loading`
    pub async fn load(&self, service: &dyn DataService, resource: &str) {
        let path = format!("{}?name={}", routes::PJSON, resource);
        let next = match service.fetch(&path).await {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => {
                tracing::warn!(%resource, error = %err, "metadata fetch failed");
                FetchState::Failed(err.to_string())
            }
        };
        self.metadata.send_replace(next);
    }
}

impl Default for MainViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedService(JsonValue);

    #[async_trait]
    impl DataService for FixedService {
        async fn fetch(&self, _path: &str) -> Result<JsonValue> {
            Ok(self.0.clone())
        }
    }

    struct FailingService;

    #[async_trait]
    impl DataService for FailingService {
        async fn fetch(&self, path: &str) -> Result<JsonValue> {
            Err(anyhow!("fetch of {path} never resolved"))
        }
    }

    #[test]
    fn test_starts_loading() {
        let vm = MainViewModel::new();
        assert_eq!(*vm.metadata().borrow(), FetchState::Loading);
    }

    #[tokio::test]
    async fn test_transitions_to_loaded() {
        let vm = MainViewModel::new();
        let mut observer = vm.metadata();
        let service = FixedService(serde_json::json!({"title": "Hello World"}));

        vm.load(&service, "pages/helloworld").await;

        observer.changed().await.unwrap();
        assert_eq!(
            *observer.borrow(),
            FetchState::Loaded(serde_json::json!({"title": "Hello World"}))
        );
    }

    #[tokio::test]
    async fn test_transitions_to_failed() {
        let vm = MainViewModel::new();
        let service = FailingService;

        vm.load(&service, "pages/helloworld").await;

        match &*vm.metadata().borrow() {
            FetchState::Failed(message) => {
                assert!(message.contains("pages/helloworld"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    /// DataService backed by the real router, the way the entry page talks
    /// to the server.
    struct RouterService(axum::Router);

    #[async_trait]
    impl DataService for RouterService {
        async fn fetch(&self, path: &str) -> Result<JsonValue> {
            use tower::ServiceExt;

            let response = self
                .0
                .clone()
                .oneshot(
                    axum::http::Request::builder()
                        .method("GET")
                        .uri(path)
                        .body(axum::body::Body::empty())
                        .unwrap(),
                )
                .await?;

            if !response.status().is_success() {
                return Err(anyhow!("request for {path} failed: {}", response.status()));
            }

            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
            Ok(serde_json::from_slice(&body)?)
        }
    }

    fn setup_router_service() -> (RouterService, tempfile::TempDir) {
        use crate::config::Config;
        use crate::handlers;
        use crate::loader::ResourceLoader;
        use crate::state::AppState;
        use crate::store::FormStore;
        use std::sync::Arc;

        let dir = tempfile::TempDir::new().unwrap();
        let content_dir = dir.path().join("content");
        std::fs::create_dir_all(content_dir.join("pages")).unwrap();
        std::fs::write(
            content_dir.join("pages/helloworld.json"),
            r#"{"title": "Hello World"}"#,
        )
        .unwrap();

        let config = Config {
            port: 3000,
            host: "0.0.0.0".to_string(),
            static_dir: dir.path().join("public"),
            content_dir: content_dir.clone(),
        };

        let state = AppState {
            store: FormStore::new(),
            resources: ResourceLoader::new(content_dir),
            config: Arc::new(config),
        };

        (RouterService(handlers::router(state)), dir)
    }

    #[tokio::test]
    async fn test_loads_page_metadata_through_the_server() {
        let (service, _dir) = setup_router_service();
        let vm = MainViewModel::new();

        vm.load(&service, "pages/helloworld").await;

        assert_eq!(
            *vm.metadata().borrow(),
            FetchState::Loaded(serde_json::json!({"title": "Hello World"}))
        );
    }

    #[tokio::test]
    async fn test_missing_resource_surfaces_as_failed() {
        let (service, _dir) = setup_router_service();
        let vm = MainViewModel::new();

        vm.load(&service, "pages/unknown").await;

        match &*vm.metadata().borrow() {
            FetchState::Failed(message) => assert!(message.contains("404")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_requested_path_carries_resource_name() {
        struct RecordingService(std::sync::Mutex<String>);

        #[async_trait]
        impl DataService for RecordingService {
            async fn fetch(&self, path: &str) -> Result<JsonValue> {
                *self.0.lock().unwrap() = path.to_string();
                Ok(JsonValue::Null)
            }
        }

        let vm = MainViewModel::new();
        let service = RecordingService(std::sync::Mutex::new(String::new()));

        vm.load(&service, "pages/helloworld").await;

        assert_eq!(*service.0.lock().unwrap(), "/pjson?name=pages/helloworld");
    }
}
