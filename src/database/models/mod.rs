pub mod profile;

pub use profile::{normalize_email, NewProfile, ProfileId, UserProfile};
