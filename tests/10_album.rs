mod common;

use anyhow::Result;
use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use epicmoments_api::database::models::AlbumStatus;
use epicmoments_api::testing::{fixture_album, fixture_image, fixture_tenant, MemoryStore};

use common::{app_with, get};

#[tokio::test]
async fn valid_album_returns_bundle_with_ordered_images() -> Result<()> {
    let tenant = fixture_tenant("riverside");
    let mut album = fixture_album("abc123", AlbumStatus::Ready);
    album.tenant_id = tenant.id;
    album.image_count = 3;
    // sort_order values [5, 1, 3] inserted out of order
    let images = vec![
        fixture_image(album.id, 5),
        fixture_image(album.id, 1),
        fixture_image(album.id, 3),
    ];
    let app = app_with(
        MemoryStore::new()
            .with_tenant(tenant)
            .with_album(album, images),
    );

    let (status, body) = get(&app, "/album/abc123").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["album"]["photo_count"], 3);
    assert_eq!(body["branding"]["name"], "riverside Studio");

    let orders: Vec<i64> = body["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["sort_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 3, 5]);
    Ok(())
}

#[tokio::test]
async fn resolving_the_same_token_twice_yields_identical_bundles() -> Result<()> {
    let album = fixture_album("abc123", AlbumStatus::Delivered);
    let images = vec![fixture_image(album.id, 0), fixture_image(album.id, 1)];
    let app = app_with(MemoryStore::new().with_album(album, images));

    let (first_status, first) = get(&app, "/album/abc123").await?;
    let (second_status, second) = get(&app, "/album/abc123").await?;
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn unknown_token_is_not_found() -> Result<()> {
    let app = app_with(MemoryStore::new());

    let (status, body) = get(&app, "/album/nope").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Album not found or access denied");
    Ok(())
}

#[tokio::test]
async fn draft_album_is_not_found_even_when_public() -> Result<()> {
    let album = fixture_album("draft001", AlbumStatus::Draft);
    assert!(album.is_public);
    let app = app_with(MemoryStore::new().with_album(album, vec![]));

    let (status, body) = get(&app, "/album/draft001").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Album not found or access denied");
    Ok(())
}

#[tokio::test]
async fn private_album_is_indistinguishable_from_missing() -> Result<()> {
    let mut album = fixture_album("priv001", AlbumStatus::Ready);
    album.is_public = false;
    let app = app_with(MemoryStore::new().with_album(album, vec![]));

    let (private_status, private_body) = get(&app, "/album/priv001").await?;
    let (missing_status, missing_body) = get(&app, "/album/ghost").await?;
    assert_eq!(private_status, missing_status);
    assert_eq!(private_body, missing_body);
    Ok(())
}

#[tokio::test]
async fn expired_album_gets_a_distinct_403() -> Result<()> {
    let mut album = fixture_album("exp999", AlbumStatus::Delivered);
    album.expires_at = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    let app = app_with(MemoryStore::new().with_album(album, vec![]));

    let (status, body) = get(&app, "/album/exp999").await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Album link has expired");
    Ok(())
}

#[tokio::test]
async fn future_expiry_still_discloses() -> Result<()> {
    let mut album = fixture_album("later01", AlbumStatus::Ready);
    album.expires_at = Some(Utc::now() + Duration::days(7));
    let app = app_with(MemoryStore::new().with_album(album, vec![]));

    let (status, _) = get(&app, "/album/later01").await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn missing_tenant_falls_back_to_platform_branding() -> Result<()> {
    let album = fixture_album("abc123", AlbumStatus::Ready);
    let app = app_with(MemoryStore::new().with_album(album, vec![]));

    let (status, body) = get(&app, "/album/abc123").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["branding"]["name"], "EpicMoments");
    Ok(())
}
