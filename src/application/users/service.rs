//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserId,
    UserRepositoryInterface,
};

/// Hard cap on the number of records a list call returns.
const LIST_LIMIT: i64 = 1000;

/// User service — orchestrates the CRUD use-cases.
///
/// Holds the repository behind `Arc<dyn ...>` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService {
    repo: Arc<dyn UserRepositoryInterface>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepositoryInterface>) -> Self {
        Self { repo }
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a new user after checking email uniqueness.
    ///
    /// The write is followed by a read of the stored record; a miss there
    /// means the store lost the row and is reported as an inconsistency.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        if self.repo.find_by_email(&dto.email).await?.is_some() {
            return Err(DomainError::DuplicateEmail(dto.email));
        }

        let id = self.repo.insert(dto).await?;

        let user = self.repo.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::Inconsistent(format!("user {} not readable after insert", id))
        })?;

        info!(user_id = %user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// Apply a partial update, then re-read the canonical record.
    pub async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<User> {
        let id = UserId::parse(id)?;

        if dto.is_empty() {
            return Err(DomainError::Validation {
                field: "update",
                reason: "no fields to update".into(),
            });
        }

        let matched = self.repo.update(&id, dto).await?;
        if matched == 0 {
            return Err(not_found(&id));
        }

        // The record matched a moment ago; a miss here means it was
        // deleted concurrently.
        let user = self.repo.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::Inconsistent(format!("user {} vanished after update", id))
        })?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Delete a user. Deleting the same id twice reports not-found.
    pub async fn delete_user(&self, id: &str) -> DomainResult<()> {
        let id = UserId::parse(id)?;

        let deleted = self.repo.delete(&id).await?;
        if deleted == 0 {
            return Err(not_found(&id));
        }

        info!(user_id = %id, "User deleted");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List stored users, capped at 1000 records.
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.repo.find_all(LIST_LIMIT).await?)
    }

    /// Get a single user by its string-encoded id.
    pub async fn get_user(&self, id: &str) -> DomainResult<User> {
        let id = UserId::parse(id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))
    }
}

fn not_found(id: &UserId) -> DomainError {
    DomainError::NotFound {
        entity: "user",
        field: "id",
        value: id.to_hex(),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::application::users::testing::MemoryUserRepository;

    fn service() -> (Arc<MemoryUserRepository>, UserService) {
        let repo = Arc::new(MemoryUserRepository::new());
        (repo.clone(), UserService::new(repo))
    }

    fn ann() -> CreateUserDto {
        CreateUserDto {
            name: "Ann Lee".into(),
            email: "a@x.com".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_returns_record_with_round_tripping_id() {
        let (_, svc) = service();
        let user = svc.create_user(ann()).await.unwrap();
        assert_eq!(user.name, "Ann Lee");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(UserId::parse(&user.id.to_hex()).unwrap(), user.id);
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let (_, svc) = service();
        let created = svc.create_user(ann()).await.unwrap();
        let fetched = svc.get_user(&created.id.to_hex()).await.unwrap();
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.birth_date, created.birth_date);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_adds_nothing() {
        let (repo, svc) = service();
        svc.create_user(ann()).await.unwrap();

        let err = svc.create_user(ann()).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEmail(_)));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected() {
        let (_, svc) = service();
        for bad in ["", "xyz", "60C72B2F9B1D4C001F8E4D6A", "60c72b2f9b1d4c001f8e4d6"] {
            let err = svc.get_user(bad).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "get {:?}", bad);

            let err = svc.delete_user(bad).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "delete {:?}", bad);

            let dto = UpdateUserDto {
                name: Some("Bob Roe".into()),
                ..Default::default()
            };
            let err = svc.update_user(bad, dto).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidId(_)), "update {:?}", bad);
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (_, svc) = service();
        let id = UserId::generate().to_hex();

        assert!(matches!(
            svc.get_user(&id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            svc.delete_user(&id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));

        let dto = UpdateUserDto {
            name: Some("Bob Roe".into()),
            ..Default::default()
        };
        assert!(matches!(
            svc.update_user(&id, dto).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_any_mutation() {
        let (_, svc) = service();
        let created = svc.create_user(ann()).await.unwrap();

        let err = svc
            .update_user(&created.id.to_hex(), UpdateUserDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let fetched = svc.get_user(&created.id.to_hex()).await.unwrap();
        assert_eq!(fetched.name, "Ann Lee");
    }

    #[tokio::test]
    async fn partial_update_leaves_absent_fields_unchanged() {
        let (_, svc) = service();
        let created = svc.create_user(ann()).await.unwrap();

        let dto = UpdateUserDto {
            email: Some("ann@y.com".into()),
            ..Default::default()
        };
        let updated = svc.update_user(&created.id.to_hex(), dto).await.unwrap();

        assert_eq!(updated.email, "ann@y.com");
        assert_eq!(updated.name, "Ann Lee");
        assert_eq!(updated.birth_date, created.birth_date);
    }

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let (_, svc) = service();
        let id = svc.create_user(ann()).await.unwrap().id.to_hex();

        svc.delete_user(&id).await.unwrap();
        assert!(matches!(
            svc.delete_user(&id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn list_is_capped_at_one_thousand() {
        let (repo, svc) = service();
        repo.seed(1005);
        assert_eq!(svc.list_users().await.unwrap().len(), 1000);
    }
}
