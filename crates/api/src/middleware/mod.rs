//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac`] -- Role gates built on the `marquee_core::authz` predicate.

pub mod auth;
pub mod rbac;
