use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::context::ApiContext;
use crate::error::ApiError;
use crate::share::assembler::{self, AlbumBundle};
use crate::share::policy;

/// GET /album/:token - public shared album view
///
/// Policy failures surface with distinct bodies: 404 "not found" for tokens
/// that resolve to nothing disclosable, 403 "expired" for real albums whose
/// link has lapsed. Neither discloses image data.
pub async fn album_get(
    State(ctx): State<ApiContext>,
    Path(token): Path<String>,
) -> Result<Json<AlbumBundle>, ApiError> {
    let album = policy::resolve(ctx.store.as_ref(), &token, Utc::now()).await?;
    let bundle = assembler::assemble(ctx.store.as_ref(), &ctx.links, &album).await?;
    Ok(Json(bundle))
}
