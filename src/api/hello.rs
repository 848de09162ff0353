use serde::Deserialize;
use validator::Validate;

use super::validation::{not_blank, trimmed, validated, REQUIRED};
use crate::error::ApiError;

/// Body of the hello demo POST
#[derive(Debug, Default, Deserialize, Validate)]
pub struct HelloRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 10, message = "Ensure this field has no more than 10 characters.")
    )]
    pub name: Option<String>,
}

impl HelloRequest {
    /// Validated greeting target
    pub fn into_name(self) -> Result<String, ApiError> {
        let request = validated(Self {
            name: trimmed(self.name),
        })?;
        request
            .name
            .ok_or_else(|| ApiError::field_error("name", REQUIRED))
    }
}
