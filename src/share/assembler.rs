use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::database::models::{Album, AlbumStatus, Image, Tenant};
use crate::share::store::GalleryStore;
use crate::share::ShareError;
use crate::storage::StorageLinks;

/// The complete viewable representation of an authorized album: metadata,
/// tenant branding, and the ordered image list, consistent as of one pass
/// over the store.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumBundle {
    pub album: AlbumView,
    pub branding: Branding,
    pub images: Vec<ImageView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumView {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: AlbumStatus,
    pub created_at: DateTime<Utc>,
    /// Human-readable creation date, e.g. "June 15, 2026".
    pub created_display: String,
    /// Live count of fetched images, not the stored denormalized counter.
    pub photo_count: usize,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Cosmetic studio branding. Falls back to platform defaults when the tenant
/// row is missing - branding never blocks album display.
#[derive(Debug, Clone, Serialize)]
pub struct Branding {
    pub name: String,
    pub logo_url: Option<String>,
    pub primary_color: String,
}

impl Branding {
    pub fn platform_default() -> Self {
        let delivery = &crate::config::config().delivery;
        Self {
            name: delivery.platform_name.clone(),
            logo_url: None,
            primary_color: delivery.platform_primary_color.clone(),
        }
    }

    fn from_tenant(tenant: Tenant) -> Self {
        Self {
            name: tenant.name,
            logo_url: tenant.logo_url,
            primary_color: tenant.primary_color,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageView {
    pub id: Uuid,
    /// Watermarked variant when present, else thumbnail, else the original.
    pub preview_url: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub sort_order: i32,
}

impl ImageView {
    fn from_image(image: &Image, links: &StorageLinks) -> Self {
        let preview_key = image
            .watermarked_key
            .as_deref()
            .or(image.thumbnail_key.as_deref())
            .unwrap_or(&image.storage_key);
        Self {
            id: image.id,
            preview_url: links.object_url(preview_key),
            width: image.width,
            height: image.height,
            sort_order: image.sort_order,
        }
    }
}

/// Album Assembler: build the bundle for an album that already passed the
/// access policy. Store failures here escalate as upstream errors - a grant
/// followed by a fetch failure must never yield a silent partial album.
pub async fn assemble(
    store: &dyn GalleryStore,
    links: &StorageLinks,
    album: &Album,
) -> Result<AlbumBundle, ShareError> {
    let branding = match store.tenant_by_id(album.tenant_id).await? {
        Some(tenant) => Branding::from_tenant(tenant),
        None => {
            tracing::warn!(album_id = %album.id, tenant_id = %album.tenant_id,
                "tenant missing for shared album, using platform branding");
            Branding::platform_default()
        }
    };

    // Store contract: ordered by sort_order, then created_at, then id
    let images = store.album_images(album.id).await?;

    if images.len() as i32 != album.image_count {
        tracing::warn!(album_id = %album.id, stored = album.image_count, live = images.len(),
            "album image_count out of sync with live image rows");
    }

    let image_views = images
        .iter()
        .map(|image| ImageView::from_image(image, links))
        .collect();

    Ok(AlbumBundle {
        album: AlbumView {
            id: album.id,
            title: album.title.clone(),
            description: album.description.clone(),
            status: album.status,
            created_at: album.created_at,
            created_display: album.created_at.format("%B %-d, %Y").to_string(),
            photo_count: images.len(),
            expires_at: album.expires_at,
        },
        branding,
        images: image_views,
    })
}
