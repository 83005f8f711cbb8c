use std::sync::Arc;

use crate::share::store::GalleryStore;
use crate::storage::StorageLinks;

/// Request-scoped dependencies handed to every handler. Storage access goes
/// through the [`GalleryStore`] trait so tests can swap in the in-memory
/// store; nothing is read from ambient globals in the share core.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn GalleryStore>,
    pub links: StorageLinks,
}

impl ApiContext {
    pub fn new(store: Arc<dyn GalleryStore>, links: StorageLinks) -> Self {
        Self { store, links }
    }
}
