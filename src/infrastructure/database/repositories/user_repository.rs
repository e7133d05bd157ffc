//! MongoDB-backed user repository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::domain::{
    CreateUserDto, StoreError, StoreResult, UpdateUserDto, User, UserId,
    UserRepositoryInterface,
};
use crate::infrastructure::database::documents::UserDocument;

/// Name of the backing collection.
const COLLECTION: &str = "users";

pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

// ── Error mapping ───────────────────────────────────────────────

fn store_err(e: mongodb::error::Error) -> StoreError {
    use mongodb::error::ErrorKind;

    match e.kind.as_ref() {
        ErrorKind::ServerSelection { .. } => StoreError::Unavailable(e.to_string()),
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StoreError::Timeout(e.to_string())
        }
        ErrorKind::Io(_) => StoreError::NotConnected(e.to_string()),
        _ => StoreError::Unknown(e.to_string()),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let found = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(store_err)?;
        Ok(found.map(User::from))
    }

    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(store_err)?;
        Ok(found.map(User::from))
    }

    async fn find_all(&self, limit: i64) -> StoreResult<Vec<User>> {
        let docs: Vec<UserDocument> = self
            .collection
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(store_err)?
            .try_collect()
            .await
            .map_err(store_err)?;

        Ok(docs.into_iter().map(User::from).collect())
    }

    async fn insert(&self, dto: CreateUserDto) -> StoreResult<UserId> {
        // The id is assigned client-side so the caller gets a typed id
        // back instead of the raw BSON `inserted_id`.
        let id = UserId::generate();
        let document = UserDocument {
            id: id.as_object_id(),
            name: dto.name,
            email: dto.email,
            birth_date: dto.birth_date,
        };

        self.collection
            .insert_one(document)
            .await
            .map_err(store_err)?;

        Ok(id)
    }

    async fn update(&self, id: &UserId, dto: UpdateUserDto) -> StoreResult<u64> {
        let mut set = Document::new();
        if let Some(name) = dto.name {
            set.insert("name", name);
        }
        if let Some(email) = dto.email {
            set.insert("email", email);
        }
        if let Some(birth_date) = dto.birth_date {
            // Must match the serde encoding of `UserDocument::birth_date`.
            set.insert("birth_date", birth_date.to_string());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .await
            .map_err(store_err)?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: &UserId) -> StoreResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(store_err)?;

        Ok(result.deleted_count)
    }
}
