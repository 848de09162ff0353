// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Middleware: None

pub mod hello;
pub mod hello_viewset;
pub mod profile;
pub mod system;

pub use profile::{profile_create, profile_list, profile_retrieve};
