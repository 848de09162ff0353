// handlers/protected/mod.rs - Protected handlers (token authentication required)
//
// Security Level: token + ownership (caller must be the profile itself)
// Middleware: token_auth_middleware injects AuthUser

pub mod profile;

pub use profile::{profile_destroy, profile_partial_update, profile_update};
