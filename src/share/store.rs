use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Album, Image, Product, Tenant};

/// Read-only data access for the public gallery surface.
///
/// Rows come back as the strongly-typed entities from `database::models`, so
/// nothing past this boundary branches on untyped field presence. Handlers
/// and the share core talk to this trait; production wires in [`PgGalleryStore`]
/// and tests wire in `testing::MemoryStore`.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Resolve a share token to at most one album that is public and in a
    /// disclosable status (ready/delivered). Expiration is NOT checked here;
    /// that is the policy evaluator's job, against an explicit clock.
    async fn find_shared_album(&self, token: &str) -> Result<Option<Album>, DatabaseError>;

    async fn tenant_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError>;

    async fn tenant_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DatabaseError>;

    /// All images of an album, ordered by `sort_order` ascending with ties
    /// broken by `created_at` then `id` (stable, deterministic).
    async fn album_images(&self, album_id: Uuid) -> Result<Vec<Image>, DatabaseError>;

    /// One image, but only if it belongs to the given album. Cross-album
    /// image ids come back as None.
    async fn album_image(
        &self,
        album_id: Uuid,
        image_id: Uuid,
    ) -> Result<Option<Image>, DatabaseError>;

    /// Portfolio-flagged images for a tenant's public marketing gallery,
    /// newest first. Independent of album access rules.
    async fn portfolio_images(&self, tenant_id: Uuid) -> Result<Vec<Image>, DatabaseError>;

    /// Active shop products for a tenant, by sort order.
    async fn active_products(&self, tenant_id: Uuid) -> Result<Vec<Product>, DatabaseError>;

    /// Connectivity probe for /health.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Postgres-backed store. All queries are tenant-scoped by construction:
/// albums by unique share token, images always joined through their album id.
pub struct PgGalleryStore {
    pool: PgPool,
}

impl PgGalleryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryStore for PgGalleryStore {
    async fn find_shared_album(&self, token: &str) -> Result<Option<Album>, DatabaseError> {
        let album = sqlx::query_as::<_, Album>(
            "SELECT * FROM albums \
             WHERE share_token = $1 \
               AND is_public = TRUE \
               AND status IN ('ready', 'delivered')",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(album)
    }

    async fn tenant_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    async fn tenant_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DatabaseError> {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tenant)
    }

    async fn album_images(&self, album_id: Uuid) -> Result<Vec<Image>, DatabaseError> {
        let images = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE album_id = $1 \
             ORDER BY sort_order ASC, created_at ASC, id ASC",
        )
        .bind(album_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    async fn album_image(
        &self,
        album_id: Uuid,
        image_id: Uuid,
    ) -> Result<Option<Image>, DatabaseError> {
        let image = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE id = $1 AND album_id = $2",
        )
        .bind(image_id)
        .bind(album_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(image)
    }

    async fn portfolio_images(&self, tenant_id: Uuid) -> Result<Vec<Image>, DatabaseError> {
        let images = sqlx::query_as::<_, Image>(
            "SELECT * FROM images \
             WHERE tenant_id = $1 AND is_portfolio = TRUE \
             ORDER BY created_at DESC, id ASC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    async fn active_products(&self, tenant_id: Uuid) -> Result<Vec<Product>, DatabaseError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products \
             WHERE tenant_id = $1 AND is_active = TRUE \
             ORDER BY sort_order ASC, created_at ASC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
