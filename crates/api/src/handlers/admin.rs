//! Handlers for the `/admin` resource (user management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::authz::role_change_allowed;
use marquee_core::error::CoreError;
use marquee_core::roles::{is_valid_role, ALL_ROLES};
use marquee_core::types::DbId;
use serde::Deserialize;

use marquee_db::models::user::UserResponse;
use marquee_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::CountedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/users
///
/// List all users (password hashes excluded).
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<CountedResponse<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(CountedResponse::new(responses)))
}

/// PUT /admin/users/{id}/role
///
/// Change a user's role. The generic admin gate is checked first (by the
/// extractor); the self-lockout rule is applied on top of it, so an admin
/// can never demote themselves.
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<StatusCode> {
    let role = match input.role.as_deref() {
        Some(role) if is_valid_role(role) => role,
        _ => {
            return Err(CoreError::validation(format!(
                "Invalid role; valid roles: {}",
                ALL_ROLES.join(", ")
            ))
            .into())
        }
    };

    if !role_change_allowed(admin.user_id, &admin.role, id, role) {
        return Err(
            CoreError::validation("You cannot remove your own admin privileges").into(),
        );
    }

    let updated = UserRepo::update_role(&state.pool, id, role).await?;
    if !updated {
        return Err(CoreError::NotFound { entity: "User", id }.into());
    }

    tracing::info!(user_id = id, role, changed_by = admin.user_id, "User role updated");

    Ok(StatusCode::NO_CONTENT)
}
