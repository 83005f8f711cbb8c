use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::context::ApiContext;
use crate::error::ApiError;
use crate::share::delivery;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub album_token: String,
    pub image_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: DownloadType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadType {
    #[default]
    Single,
    All,
}

/// POST /api/download - authorize and resolve a download for one image or
/// the whole album.
///
/// Both paths re-run the full access policy; a successful page view earlier
/// in the session grants nothing here. Malformed input is rejected before
/// any store access.
pub async fn download_post(
    State(ctx): State<ApiContext>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Invalid request data"))?;

    if request.album_token.trim().is_empty() {
        return Err(ApiError::bad_request("albumToken is required"));
    }

    let now = Utc::now();

    match request.kind {
        DownloadType::Single => {
            let raw_id = request
                .image_id
                .ok_or_else(|| ApiError::bad_request("imageId is required for single downloads"))?;
            let image_id = Uuid::parse_str(&raw_id)
                .map_err(|_| ApiError::bad_request("imageId must be a valid UUID"))?;

            let download = delivery::single(
                ctx.store.as_ref(),
                &ctx.links,
                &request.album_token,
                image_id,
                now,
            )
            .await?;

            Ok(Json(json!({
                "success": true,
                "downloadUrl": download.download_url,
                "filename": download.filename,
            })))
        }
        DownloadType::All => {
            let manifest =
                delivery::bulk(ctx.store.as_ref(), &ctx.links, &request.album_token, now).await?;

            // Archive packaging is delegated; the response reports what the
            // archive will contain.
            Ok(Json(json!({
                "success": true,
                "imageCount": manifest.image_count(),
                "albumTitle": manifest.album_title,
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_defaults_to_single() {
        let request: DownloadRequest =
            serde_json::from_value(json!({ "albumToken": "abc123", "imageId": null })).unwrap();
        assert_eq!(request.kind, DownloadType::Single);
    }

    #[test]
    fn type_all_parses() {
        let request: DownloadRequest =
            serde_json::from_value(json!({ "albumToken": "abc123", "type": "all" })).unwrap();
        assert_eq!(request.kind, DownloadType::All);
    }
}
