pub mod extract;
pub mod hello;
pub mod profile;
pub mod validation;

pub use extract::{parse_body, JsonBody, RawBody};
pub use hello::HelloRequest;
pub use profile::{ProfileFields, ProfilePatch, ProfileRequest};
