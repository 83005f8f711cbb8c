//! Share-link album resolution: the gate between an anonymous token holder
//! and tenant-private media.
//!
//! `policy` decides whether a token discloses anything, `assembler` builds
//! the viewable bundle, and `delivery` authorizes actual downloads. Every
//! entry point re-runs the policy against the store; nothing is cached, so
//! an album flipped private or expired mid-session is enforced on the very
//! next request.

pub mod assembler;
pub mod delivery;
pub mod policy;
pub mod store;

use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Failure taxonomy for the share-link surface. `NotFound` deliberately
/// covers both "token never existed" and "album exists but is not
/// disclosable" so probing cannot confirm an album's existence.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Album not found or access denied")]
    NotFound,

    #[error("Album link has expired")]
    Expired,

    #[error("No images found in album")]
    EmptyAlbum,

    #[error("{0}")]
    Validation(String),

    #[error("storage backend error")]
    Upstream(#[from] DatabaseError),
}
