//! User DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::{CreateUserDto, UpdateUserDto, User};

/// User API representation — the canonical stored record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// 24-character hex id
    pub id: String,
    pub name: String,
    pub email: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub birth_date: NaiveDate,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_hex(),
            name: u.name,
            email: u.email,
            birth_date: u.birth_date,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(custom(function = validate_name))]
    pub name: String,
    #[validate(email(message = "not a valid email address"))]
    pub email: String,
    pub birth_date: NaiveDate,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            email: req.email,
            birth_date: req.birth_date,
        }
    }
}

/// Update user request — absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(custom(function = validate_name))]
    pub name: Option<String>,
    #[validate(email(message = "not a valid email address"))]
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name.map(|n| n.trim().to_string()),
            email: req.email,
            birth_date: req.birth_date,
        }
    }
}

/// Name must be 3-50 characters after trimming surrounding whitespace.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if !(3..=50).contains(&len) {
        let mut err = ValidationError::new("length");
        err.message = Some("must be 3-50 characters".into());
        return Err(err);
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
