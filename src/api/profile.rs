use serde::Deserialize;
use validator::Validate;

use super::validation::{not_blank, trimmed, validated, REQUIRED};
use crate::database::models::normalize_email;
use crate::error::{ApiError, FieldErrors};

/// Body for creating a profile or replacing one (PUT). Every field except
/// `bio` must be present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name: Option<String>,

    pub bio: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "not_blank"))]
    pub password: Option<String>,
}

/// Body for PATCH. Only the fields present are checked and applied.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfilePatch {
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name: Option<String>,

    pub bio: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub password: Option<String>,
}

/// Profile fields after validation, email normalized and password still plain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub email: String,
    pub name: String,
    pub bio: String,
    pub password: String,
}

impl ProfileRequest {
    pub fn into_fields(self) -> Result<ProfileFields, ApiError> {
        let request = validated(Self {
            email: trimmed(self.email).map(|e| normalize_email(&e)),
            name: trimmed(self.name),
            bio: trimmed(self.bio),
            password: self.password,
        })?;

        match (request.email, request.name, request.password) {
            (Some(email), Some(name), Some(password)) => Ok(ProfileFields {
                email,
                name,
                bio: request.bio.unwrap_or_default(),
                password,
            }),
            (email, name, password) => {
                let mut field_errors = FieldErrors::new();
                for (field, value) in [("email", email), ("name", name), ("password", password)] {
                    if value.is_none() {
                        field_errors.insert(field.to_string(), vec![REQUIRED.to_string()]);
                    }
                }
                Err(ApiError::validation_error(field_errors))
            }
        }
    }
}

impl ProfilePatch {
    pub fn into_validated(self) -> Result<ProfilePatch, ApiError> {
        validated(Self {
            email: trimmed(self.email).map(|e| normalize_email(&e)),
            name: trimmed(self.name),
            bio: trimmed(self.bio),
            password: self.password,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.bio.is_none() && self.password.is_none()
    }
}
