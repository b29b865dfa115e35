//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role fails
//! the [`marquee_core::authz::authorize`] check for its role set, so every
//! 403 tells the caller which role they have and which are accepted.
//! Authentication failure (no/invalid token) is a distinct 401 raised by
//! the inner [`AuthUser`] extraction.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use marquee_core::authz::authorize;
use marquee_core::error::CoreError;
use marquee_core::roles::{ROLE_ADMIN, ROLE_CLIENT, ROLE_EMPLOYEE, ROLE_MANAGER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Shared body of every role-gate extractor.
async fn require_roles(
    parts: &mut Parts,
    state: &AppState,
    required: &[&'static str],
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    authorize(&user.role, required)
        .map_err(|denied| AppError::Core(CoreError::Forbidden(denied.to_string())))?;
    Ok(user)
}

/// Requires the `admin` role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_roles(parts, state, &[ROLE_ADMIN]).await?;
        Ok(RequireAdmin(user))
    }
}

/// Requires `manager` or `admin` role. Catalog mutations go through this.
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_roles(parts, state, &[ROLE_MANAGER, ROLE_ADMIN]).await?;
        Ok(RequireManager(user))
    }
}

/// Requires `employee`, `manager`, or `admin` role (staff dashboards).
pub struct RequireEmployee(pub AuthUser);

impl FromRequestParts<AppState> for RequireEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_roles(parts, state, &[ROLE_EMPLOYEE, ROLE_MANAGER, ROLE_ADMIN]).await?;
        Ok(RequireEmployee(user))
    }
}

/// Requires the `client` role (the own-reservations listing).
pub struct RequireClient(pub AuthUser);

impl FromRequestParts<AppState> for RequireClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = require_roles(parts, state, &[ROLE_CLIENT]).await?;
        Ok(RequireClient(user))
    }
}
