//! JWT-based caller extraction for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use trackshare_core::error::CoreError;
use trackshare_core::identity::Caller;
use trackshare_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller identity of the current request.
///
/// Unlike a hard authentication guard, a missing `Authorization` header is
/// not an error: it yields [`Caller::Anonymous`] and leaves the decision to
/// the operation. Credentials that are present but unusable are rejected
/// with 401.
///
/// ```ignore
/// async fn my_handler(CallerIdentity(caller): CallerIdentity) -> AppResult<Json<()>> {
///     tracing::info!(user_id = ?caller.user_id(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity(pub Caller);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(CallerIdentity(Caller::Anonymous));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        // Tokens outlive accounts; a deleted user must not act through one.
        if UserRepo::find_by_id(&state.pool, claims.sub).await?.is_none() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "User no longer exists".into(),
            )));
        }

        Ok(CallerIdentity(Caller::User(claims.sub)))
    }
}
