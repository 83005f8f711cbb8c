use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::share::policy;
use crate::share::store::GalleryStore;
use crate::share::ShareError;
use crate::storage::StorageLinks;

/// A resolved single-image download.
#[derive(Debug, Clone, Serialize)]
pub struct SingleDownload {
    pub download_url: String,
    pub filename: String,
}

/// Ordered manifest for a full-album download. Archive construction is the
/// packaging collaborator's job; this is the contract it consumes.
#[derive(Debug, Clone)]
pub struct BulkManifest {
    pub album_title: String,
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub download_url: String,
    pub filename: String,
}

impl BulkManifest {
    pub fn image_count(&self) -> usize {
        self.entries.len()
    }
}

/// Delivery Gate, single-image path. Re-runs the full access policy - a token
/// is not a long-lived capability, and the album may have expired between
/// page view and download click. The image must belong to the resolved album;
/// a syntactically valid id from another album is indistinguishable from a
/// nonexistent one.
pub async fn single(
    store: &dyn GalleryStore,
    links: &StorageLinks,
    token: &str,
    image_id: Uuid,
    now: DateTime<Utc>,
) -> Result<SingleDownload, ShareError> {
    let album = policy::resolve(store, token, now).await?;

    let image = store
        .album_image(album.id, image_id)
        .await?
        .ok_or(ShareError::NotFound)?;

    Ok(SingleDownload {
        download_url: links.object_url(&image.storage_key),
        filename: image.download_filename(),
    })
}

/// Delivery Gate, bulk path. Re-runs the full access policy, then enumerates
/// every image in sort order. An album with zero images is reported as
/// `EmptyAlbum`, not `NotFound` - the link itself is legitimate.
pub async fn bulk(
    store: &dyn GalleryStore,
    links: &StorageLinks,
    token: &str,
    now: DateTime<Utc>,
) -> Result<BulkManifest, ShareError> {
    let album = policy::resolve(store, token, now).await?;

    let images = store.album_images(album.id).await?;
    if images.is_empty() {
        return Err(ShareError::EmptyAlbum);
    }

    let entries = images
        .iter()
        .map(|image| ManifestEntry {
            download_url: links.object_url(&image.storage_key),
            filename: image.download_filename(),
        })
        .collect();

    Ok(BulkManifest {
        album_title: album.title,
        entries,
    })
}
