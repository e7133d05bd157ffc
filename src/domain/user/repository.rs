use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User, UserId};
use crate::domain::error::StoreResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>>;

    /// All users, capped at `limit` records and materialized in full.
    async fn find_all(&self, limit: i64) -> StoreResult<Vec<User>>;

    /// Insert a new user and return the identifier assigned to it.
    async fn insert(&self, dto: CreateUserDto) -> StoreResult<UserId>;

    /// Apply the present fields of `dto`; returns the matched count (0 or 1).
    async fn update(&self, id: &UserId, dto: UpdateUserDto) -> StoreResult<u64>;

    /// Returns the deleted count (0 or 1).
    async fn delete(&self, id: &UserId) -> StoreResult<u64>;
}
