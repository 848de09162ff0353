//! Ownership rule for profile records.
//!
//! Reads are open to everyone. A write is allowed only when the caller is the
//! profile itself, since every account owns exactly its own record.

use axum::http::Method;

use crate::database::ProfileId;

/// Methods that never mutate and therefore skip the ownership check.
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Allow users to edit only their own profile.
pub fn update_own_profile(method: &Method, caller: Option<ProfileId>, owner: ProfileId) -> bool {
    if is_safe_method(method) {
        return true;
    }
    caller == Some(owner)
}
