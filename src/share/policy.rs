use chrono::{DateTime, Utc};

use crate::database::models::Album;
use crate::share::store::GalleryStore;
use crate::share::ShareError;

/// Access Policy Evaluator: given a share token and the current time, decide
/// whether album contents may be disclosed, and if not, which failure to
/// report.
///
/// Resolution is read-only and uncached. `now` is an explicit parameter so
/// expiry-boundary behavior is testable without a wall clock.
pub async fn resolve(
    store: &dyn GalleryStore,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Album, ShareError> {
    if token.is_empty() {
        return Err(ShareError::Validation("albumToken must not be empty".to_string()));
    }
    let album = store.find_shared_album(token).await?;
    evaluate(album, now)
}

/// The pure decision over an already-fetched candidate album.
///
/// The store only surfaces albums that are public and in a disclosable
/// status, so a `None` here covers nonexistent, private, and draft tokens
/// alike - callers must not be able to tell those apart. Expiration is
/// reported distinctly: the visitor has already reached a real album, so a
/// dedicated message leaks nothing new.
pub fn evaluate(album: Option<Album>, now: DateTime<Utc>) -> Result<Album, ShareError> {
    let album = album.ok_or(ShareError::NotFound)?;

    debug_assert!(album.is_public && album.status.is_disclosable());

    match album.expires_at {
        Some(expires_at) if expires_at < now => Err(ShareError::Expired),
        _ => Ok(album),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::AlbumStatus;
    use crate::testing::{fixture_album, MemoryStore};
    use chrono::{Duration, TimeZone};

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn missing_album_is_not_found() {
        assert!(matches!(evaluate(None, at(2026)), Err(ShareError::NotFound)));
    }

    #[test]
    fn unexpired_album_is_granted() {
        let mut album = fixture_album("abc123", AlbumStatus::Ready);
        album.expires_at = Some(at(2027));
        let granted = evaluate(Some(album.clone()), at(2026)).unwrap();
        assert_eq!(granted.id, album.id);
    }

    #[test]
    fn no_expiry_never_expires() {
        let album = fixture_album("abc123", AlbumStatus::Delivered);
        assert!(album.expires_at.is_none());
        assert!(evaluate(Some(album), at(2026)).is_ok());
    }

    #[test]
    fn past_expiry_is_expired_not_not_found() {
        let mut album = fixture_album("exp999", AlbumStatus::Delivered);
        album.expires_at = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(matches!(
            evaluate(Some(album), at(2026)),
            Err(ShareError::Expired)
        ));
    }

    #[test]
    fn expiry_is_strict() {
        // exactly-now is still valid; only strictly-past timestamps expire
        let now = at(2026);
        let mut album = fixture_album("edge", AlbumStatus::Ready);
        album.expires_at = Some(now);
        assert!(evaluate(Some(album.clone()), now).is_ok());

        album.expires_at = Some(now - Duration::seconds(1));
        assert!(matches!(evaluate(Some(album), now), Err(ShareError::Expired)));
    }

    #[tokio::test]
    async fn draft_and_private_albums_resolve_as_not_found() {
        let mut draft = fixture_album("draft001", AlbumStatus::Draft);
        draft.is_public = true;
        let mut private = fixture_album("priv001", AlbumStatus::Ready);
        private.is_public = false;
        let store = MemoryStore::new().with_album(draft, vec![]).with_album(private, vec![]);

        for token in ["draft001", "priv001", "never-existed"] {
            let result = resolve(&store, token, at(2026)).await;
            assert!(matches!(result, Err(ShareError::NotFound)), "token {token}");
        }
    }

    #[tokio::test]
    async fn empty_token_is_rejected_before_lookup() {
        let store = MemoryStore::new();
        assert!(matches!(
            resolve(&store, "", at(2026)).await,
            Err(ShareError::Validation(_))
        ));
    }
}
