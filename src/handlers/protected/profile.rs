// handlers/protected/profile.rs - owner-only profile mutations
//
// Every route here sits behind token_auth_middleware, so an AuthUser is
// always present. Checks run in order: load (404), ownership (403),
// body parsing and validation (400). Bodies are taken raw so that nothing
// about the payload is looked at before the ownership check.

use axum::{
    extract::{Path, State},
    http::Method,
    Extension,
};
use tracing::{info, warn};

use crate::api::{parse_body, ProfilePatch, ProfileRequest, RawBody};
use crate::auth::hash_password;
use crate::database::UserProfile;
use crate::error::ApiError;
use crate::handlers::parse_profile_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::permissions::update_own_profile;
use crate::state::AppState;

const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// PUT /profile/:id - replace a profile
pub async fn profile_update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    method: Method,
    Path(id): Path<String>,
    RawBody(body): RawBody,
) -> ApiResult {
    let mut user = load_owned(&state, &caller, &method, &id).await?;
    let fields = parse_body::<ProfileRequest>(&body)?.into_fields()?;

    user.email = fields.email;
    user.name = fields.name;
    user.bio = fields.bio;
    user.password_hash = hash_password(fields.password, state.config.security.bcrypt_cost).await?;

    let user = state.store.save(&user).await?;
    info!("Profile {} replaced", user.id);
    Ok(ApiResponse::success("Success", "User updated successfully").and("user", user))
}

/// PATCH /profile/:id - update the fields present in the body
pub async fn profile_partial_update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    method: Method,
    Path(id): Path<String>,
    RawBody(body): RawBody,
) -> ApiResult {
    let mut user = load_owned(&state, &caller, &method, &id).await?;
    let patch = parse_body::<ProfilePatch>(&body)?.into_validated()?;

    if patch.is_empty() {
        return Ok(ApiResponse::success("Success", "User updated successfully").and("user", user));
    }

    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(name) = patch.name {
        user.name = name;
    }
    if let Some(bio) = patch.bio {
        user.bio = bio;
    }
    if let Some(password) = patch.password {
        user.password_hash = hash_password(password, state.config.security.bcrypt_cost).await?;
    }

    let user = state.store.save(&user).await?;
    info!("Profile {} updated", user.id);
    Ok(ApiResponse::success("Success", "User updated successfully").and("user", user))
}

/// DELETE /profile/:id - remove a profile
pub async fn profile_destroy(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    method: Method,
    Path(id): Path<String>,
) -> ApiResult {
    let user = load_owned(&state, &caller, &method, &id).await?;

    if !state.store.delete(user.id).await? {
        return Err(ApiError::not_found("Not found."));
    }

    info!("Profile {} deleted", user.id);
    Ok(ApiResponse::success("Success", "User deleted successfully"))
}

/// Loads the target record and applies the ownership rule.
async fn load_owned(
    state: &AppState,
    caller: &AuthUser,
    method: &Method,
    raw_id: &str,
) -> Result<UserProfile, ApiError> {
    let id = parse_profile_id(raw_id)?;
    let user = state.store.get_or_404(id).await?;

    if !update_own_profile(method, Some(caller.id), user.owner_id()) {
        warn!("Profile {} denied {} on profile {}", caller.id, method, user.id);
        return Err(ApiError::forbidden(PERMISSION_DENIED));
    }

    Ok(user)
}
