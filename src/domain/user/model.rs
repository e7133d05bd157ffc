//! User domain entity

use chrono::NaiveDate;

use super::UserId;

/// A persisted user record.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}
