//! In-memory repository fake backing service- and router-level tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    CreateUserDto, StoreResult, UpdateUserDto, User, UserId, UserRepositoryInterface,
};

/// Stores users in a `Mutex<Vec<_>>` and honors the same observable
/// contract as the Mongo-backed repository.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Bulk-load `n` users with distinct emails.
    pub fn seed(&self, n: usize) {
        let mut users = self.users.lock().unwrap();
        for i in 0..n {
            users.push(User {
                id: UserId::generate(),
                name: format!("User {}", i),
                email: format!("user{}@example.com", i),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            });
        }
    }
}

#[async_trait]
impl UserRepositoryInterface for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_all(&self, limit: i64) -> StoreResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().take(limit as usize).cloned().collect())
    }

    async fn insert(&self, dto: CreateUserDto) -> StoreResult<UserId> {
        let id = UserId::generate();
        self.users.lock().unwrap().push(User {
            id,
            name: dto.name,
            email: dto.email,
            birth_date: dto.birth_date,
        });
        Ok(id)
    }

    async fn update(&self, id: &UserId, dto: UpdateUserDto) -> StoreResult<u64> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == *id) else {
            return Ok(0);
        };

        if let Some(name) = dto.name {
            user.name = name;
        }
        if let Some(email) = dto.email {
            user.email = email;
        }
        if let Some(birth_date) = dto.birth_date {
            user.birth_date = birth_date;
        }
        Ok(1)
    }

    async fn delete(&self, id: &UserId) -> StoreResult<u64> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != *id);
        Ok((before - users.len()) as u64)
    }
}
