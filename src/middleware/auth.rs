use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::{decode_token, token_from_header, AuthError};
use crate::database::ProfileId;
use crate::error::ApiError;
use crate::state::AppState;

/// Caller identity resolved from the presented token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: ProfileId,
    pub email: String,
}

/// Token authentication middleware. Validates the token, confirms the profile
/// behind it still exists and injects [`AuthUser`] into the request.
pub async fn token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)
            .map_err(reject)?;

        let header = header
            .to_str()
            .map_err(|_| AuthError::MalformedHeader("Token string should not contain invalid characters."))
            .map_err(reject)?;

        let token = token_from_header(header).map_err(reject)?;
        decode_token(&state.config.security, token).map_err(reject)?
    };

    // Tokens of deleted profiles stop working
    let profile = state.store.get(claims.sub).await?.ok_or_else(|| {
        tracing::warn!("Token presented for missing profile {}", claims.sub);
        ApiError::from(AuthError::UnknownProfile)
    })?;

    tracing::debug!("Authenticated profile {} ({})", profile.id, profile.email);

    request.extensions_mut().insert(AuthUser {
        id: profile.id,
        email: profile.email,
    });

    Ok(next.run(request).await)
}

fn reject(err: AuthError) -> ApiError {
    tracing::warn!("Authentication failed: {}", err);
    err.into()
}
