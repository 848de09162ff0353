pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use memory::MemoryProfileStore;
pub use models::{NewProfile, ProfileId, UserProfile};
pub use postgres::PgProfileStore;
pub use store::{ProfileStore, StoreError};
