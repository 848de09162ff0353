// handlers/mod.rs - Two-tier handler layout
//
// Public (no token) -> Protected (token + ownership rule)

pub mod public;    // Hello demos, profile list/retrieve/create, root and health
pub mod protected; // Profile update, partial update and delete

use crate::database::ProfileId;
use crate::error::ApiError;

/// Parses a profile id from the path. Anything that is not a positive
/// integer cannot name a profile and reads as 404.
pub fn parse_profile_id(raw: &str) -> Result<ProfileId, ApiError> {
    raw.parse::<ProfileId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::not_found("Not found."))
}
