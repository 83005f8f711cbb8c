use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::context::ApiContext;
use crate::database::models::Image;
use crate::error::ApiError;
use crate::storage::StorageLinks;

#[derive(Debug, Deserialize)]
pub struct TenantQuery {
    pub tenant: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioImage {
    pub id: Uuid,
    pub url: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl PortfolioImage {
    fn from_image(image: &Image, links: &StorageLinks) -> Self {
        let key = image
            .watermarked_key
            .as_deref()
            .unwrap_or(&image.storage_key);
        Self {
            id: image.id,
            url: links.object_url(key),
            width: image.width,
            height: image.height,
        }
    }
}

/// GET /api/portfolio?tenant=slug - public marketing gallery
///
/// Portfolio-flagged images only; the owning albums' share policy does not
/// apply here, the flag itself is the opt-in.
pub async fn portfolio_get(
    State(ctx): State<ApiContext>,
    Query(query): Query<TenantQuery>,
) -> Result<Json<Value>, ApiError> {
    let tenant = resolve_tenant(&ctx, query.tenant).await?;
    let images = ctx.store.portfolio_images(tenant.id).await?;
    let images: Vec<PortfolioImage> = images
        .iter()
        .map(|image| PortfolioImage::from_image(image, &ctx.links))
        .collect();

    Ok(Json(json!({
        "studio": tenant.name,
        "images": images,
    })))
}

/// GET /api/shop/products?tenant=slug - active products for the public shop
pub async fn products_get(
    State(ctx): State<ApiContext>,
    Query(query): Query<TenantQuery>,
) -> Result<Json<Value>, ApiError> {
    let tenant = resolve_tenant(&ctx, query.tenant).await?;
    let products = ctx.store.active_products(tenant.id).await?;

    Ok(Json(json!({
        "studio": tenant.name,
        "products": products,
    })))
}

async fn resolve_tenant(
    ctx: &ApiContext,
    slug: Option<String>,
) -> Result<crate::database::models::Tenant, ApiError> {
    let slug = slug
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("tenant query parameter is required"))?;

    ctx.store
        .tenant_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Studio not found"))
}
