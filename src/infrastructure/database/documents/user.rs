//! BSON document shape for the users collection

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserId};

/// Storage representation of a user document.
///
/// `birth_date` is stored as its ISO `YYYY-MM-DD` string, which is how
/// `NaiveDate` serializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: UserId::from(doc.id),
            name: doc.name,
            email: doc.email,
            birth_date: doc.birth_date,
        }
    }
}
