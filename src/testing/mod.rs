//! Test support: an in-memory [`GalleryStore`] and entity fixtures.
//!
//! Lives in the library (not behind cfg(test)) so the integration tests under
//! tests/ can drive the full router without a database.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    Album, AlbumStatus, Image, Product, ProductType, SubscriptionPlan, SubscriptionStatus, Tenant,
};
use crate::share::store::GalleryStore;

/// In-memory store honoring the same contracts as the Postgres store:
/// `find_shared_album` filters on visibility and status, image lists come
/// back ordered by (sort_order, created_at, id).
#[derive(Default)]
pub struct MemoryStore {
    tenants: Vec<Tenant>,
    albums: Vec<Album>,
    images: Vec<Image>,
    products: Vec<Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tenant(mut self, tenant: Tenant) -> Self {
        self.tenants.push(tenant);
        self
    }

    pub fn with_album(mut self, album: Album, images: Vec<Image>) -> Self {
        self.albums.push(album);
        self.images.extend(images);
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }
}

#[async_trait]
impl GalleryStore for MemoryStore {
    async fn find_shared_album(&self, token: &str) -> Result<Option<Album>, DatabaseError> {
        Ok(self
            .albums
            .iter()
            .find(|a| a.share_token == token && a.is_public && a.status.is_disclosable())
            .cloned())
    }

    async fn tenant_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        Ok(self.tenants.iter().find(|t| t.id == id).cloned())
    }

    async fn tenant_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DatabaseError> {
        Ok(self.tenants.iter().find(|t| t.slug == slug).cloned())
    }

    async fn album_images(&self, album_id: Uuid) -> Result<Vec<Image>, DatabaseError> {
        let mut images: Vec<Image> = self
            .images
            .iter()
            .filter(|i| i.album_id == album_id)
            .cloned()
            .collect();
        images.sort_by(|a, b| {
            (a.sort_order, a.created_at, a.id).cmp(&(b.sort_order, b.created_at, b.id))
        });
        Ok(images)
    }

    async fn album_image(
        &self,
        album_id: Uuid,
        image_id: Uuid,
    ) -> Result<Option<Image>, DatabaseError> {
        Ok(self
            .images
            .iter()
            .find(|i| i.id == image_id && i.album_id == album_id)
            .cloned())
    }

    async fn portfolio_images(&self, tenant_id: Uuid) -> Result<Vec<Image>, DatabaseError> {
        let mut images: Vec<Image> = self
            .images
            .iter()
            .filter(|i| i.tenant_id == tenant_id && i.is_portfolio)
            .cloned()
            .collect();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(images)
    }

    async fn active_products(&self, tenant_id: Uuid) -> Result<Vec<Product>, DatabaseError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.tenant_id == tenant_id && p.is_active)
            .cloned()
            .collect();
        products.sort_by(|a, b| {
            (a.sort_order, a.created_at).cmp(&(b.sort_order, b.created_at))
        });
        Ok(products)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

pub fn fixture_tenant(slug: &str) -> Tenant {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Tenant {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        name: format!("{slug} Studio"),
        logo_url: None,
        primary_color: "#1d4ed8".to_string(),
        subscription_plan: SubscriptionPlan::Pro,
        subscription_status: SubscriptionStatus::Active,
        created_at: created,
        updated_at: created,
    }
}

/// A public album with the given token and status, no expiry.
pub fn fixture_album(token: &str, status: AlbumStatus) -> Album {
    let created = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap();
    Album {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        event_id: None,
        client_id: None,
        title: "Spring Tournament".to_string(),
        description: Some("Saturday finals".to_string()),
        status,
        is_public: true,
        share_token: token.to_string(),
        expires_at: None,
        cover_image_key: None,
        image_count: 0,
        total_size_bytes: 0,
        delivered_at: None,
        created_at: created,
        updated_at: created,
    }
}

pub fn fixture_image(album_id: Uuid, sort_order: i32) -> Image {
    let id = Uuid::new_v4();
    Image {
        id,
        tenant_id: Uuid::new_v4(),
        album_id,
        storage_key: format!("albums/{album_id}/{id}.jpg"),
        thumbnail_key: None,
        watermarked_key: None,
        original_filename: None,
        width: Some(4000),
        height: Some(2667),
        size_bytes: Some(3_500_000),
        is_portfolio: false,
        sort_order,
        created_at: Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap(),
    }
}

pub fn fixture_product(tenant_id: Uuid, name: &str, sort_order: i32) -> Product {
    Product {
        id: Uuid::new_v4(),
        tenant_id,
        name: name.to_string(),
        description: None,
        price_cents: 4900,
        product_type: ProductType::Package,
        image_count: Some(10),
        is_active: true,
        sort_order,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
