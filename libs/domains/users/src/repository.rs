use async_trait::async_trait;
use database::InMemoryCollection;
use tracing::instrument;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// Lookups and mutations only see live (not soft-deleted) users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly assigned id
    async fn add(&self, input: NewUser) -> UserResult<User>;

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Replace every field but the id; `None` when no live user has that id
    async fn update(&self, user: User) -> UserResult<Option<User>>;

    /// Soft-delete, returning the record as marked
    async fn delete(&self, id: Uuid) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: InMemoryCollection<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, input))]
    async fn add(&self, input: NewUser) -> UserResult<User> {
        let user = self.users.insert(User::new(input)).await;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        Ok(self.users.find_live(id).await)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: User) -> UserResult<Option<User>> {
        let updated = self.users.replace_live(user).await;
        if let Some(ref user) = updated {
            tracing::info!(user_id = %user.id, "User updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<Option<User>> {
        let deleted = self.users.mark_deleted(id).await;
        if deleted.is_some() {
            tracing::info!(user_id = %id, "User soft-deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Meta};

    fn input(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            last_name: "Tester".to_string(),
            gender: Gender::Male,
            meta: Meta::new(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.add(input("Alan")).await.unwrap();
        assert_eq!(created.name, "Alan");
        assert_eq!(created.last_name, "Tester");
        assert_eq!(created.gender, Gender::Male);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_add_assigns_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let a = repo.add(input("Alan")).await.unwrap();
        let b = repo.add(input("Alan")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo.add(input("Alan")).await.unwrap();

        let mut changed = created.clone();
        changed.name = "Alonzo".to_string();
        changed.gender = Gender::NotSpecified;

        let updated = repo.update(changed).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alonzo");
        assert_eq!(updated.gender, Gender::NotSpecified);
        assert!(updated.updated_at.is_some());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_none() {
        let repo = InMemoryUserRepository::new();
        let stranger = User::new(input("Nobody"));

        assert!(repo.update(stranger).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_soft() {
        let repo = InMemoryUserRepository::new();
        let gone = repo.add(input("Gone")).await.unwrap();
        let kept = repo.add(input("Kept")).await.unwrap();

        let deleted = repo.delete(gone.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, gone.id);
        assert!(!deleted.lifecycle.is_active());

        assert!(repo.get_by_id(gone.id).await.unwrap().is_none());
        assert!(repo.get_by_id(kept.id).await.unwrap().is_some());
        assert!(repo.delete(gone.id).await.unwrap().is_none());
        assert!(repo.update(gone).await.unwrap().is_none());
    }
}
