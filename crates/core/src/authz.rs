//! Role-based authorization predicates.
//!
//! The single gate every privileged route goes through is [`authorize`]:
//! a pure (caller role, required roles) -> allow/deny check. The HTTP
//! extractors in `marquee-api::middleware::rbac` are thin wrappers around
//! it, so every 403 carries the same diagnostic shape.
//!
//! [`role_change_allowed`] is the separate self-lockout rule for the
//! change-own-role operation. It is applied *in addition to* the admin
//! gate, never instead of it.

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// Denial outcome of [`authorize`].
///
/// Carries the caller's role and the accepted set so the HTTP layer can
/// tell the caller which role they have vs. which are required.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Access denied. Your role ({role}) is not authorized; required: {}", .required.join(", "))]
pub struct RoleDenied {
    pub role: String,
    pub required: Vec<&'static str>,
}

/// Check that `role` is a member of `required`.
///
/// Fails closed: an empty `required` set denies everyone.
pub fn authorize(role: &str, required: &[&'static str]) -> Result<(), RoleDenied> {
    if required.contains(&role) {
        Ok(())
    } else {
        Err(RoleDenied {
            role: role.to_string(),
            required: required.to_vec(),
        })
    }
}

/// Self-lockout prevention for `PUT /admin/users/{id}/role`.
///
/// An admin may not set their own role to anything other than admin.
/// Changes to other users, and no-op self-assignments of admin, pass.
pub fn role_change_allowed(
    actor_id: DbId,
    actor_role: &str,
    target_id: DbId,
    new_role: &str,
) -> bool {
    !(actor_id == target_id && actor_role == ROLE_ADMIN && new_role != ROLE_ADMIN)
}
