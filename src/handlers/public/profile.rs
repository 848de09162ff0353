// handlers/public/profile.rs - read and create endpoints for profiles
//
// Listing, retrieving and registering need no token.

use axum::extract::{Path, State};
use tracing::info;

use crate::api::{JsonBody, ProfileRequest};
use crate::auth::hash_password;
use crate::database::NewProfile;
use crate::handlers::parse_profile_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /profile/ - all profiles
pub async fn profile_list(State(state): State<AppState>) -> ApiResult {
    let users = state.store.list().await?;
    Ok(ApiResponse::success("users", users))
}

/// GET /profile/:id - one profile, 404 if absent
pub async fn profile_retrieve(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let id = parse_profile_id(&id)?;
    let user = state.store.get_or_404(id).await?;
    Ok(ApiResponse::success("user", user))
}

/// POST /profile/ - register a new profile
pub async fn profile_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ProfileRequest>,
) -> ApiResult {
    let fields = body.into_fields()?;
    let password_hash = hash_password(fields.password, state.config.security.bcrypt_cost).await?;

    let user = state
        .store
        .create(NewProfile {
            email: fields.email,
            name: fields.name,
            bio: fields.bio,
            password_hash,
        })
        .await?;

    info!("Created profile {} <{}>", user.id, user.email);
    Ok(ApiResponse::created("Success", "User created successfully").and("user", user))
}
