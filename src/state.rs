use crate::config::Config;
use crate::loader::ResourceLoader;
use crate::store::FormStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: FormStore,
    pub resources: ResourceLoader,
    pub config: Arc<Config>,
}
