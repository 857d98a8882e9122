//! One struct per user operation, each built from the repository it needs.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

pub struct AddUser<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AddUser<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input))]
    pub async fn execute(&self, input: NewUser) -> UserResult<User> {
        self.repository.add(input).await
    }
}

pub struct GetUserById<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> GetUserById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: Uuid) -> UserResult<Option<User>> {
        self.repository.get_by_id(user_id).await
    }
}

pub struct UpdateUser<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UpdateUser<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn execute(&self, user: User) -> UserResult<Option<User>> {
        self.repository.update(user).await
    }
}

pub struct DeleteUser<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> DeleteUser<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: Uuid) -> UserResult<Option<User>> {
        self.repository.delete(user_id).await
    }
}

// Manual Clone impls: derive would require R: Clone
impl<R: UserRepository> Clone for AddUser<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: UserRepository> Clone for GetUserById<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: UserRepository> Clone for UpdateUser<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

impl<R: UserRepository> Clone for DeleteUser<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// The user use cases the HTTP layer dispatches to
pub struct UserUseCases<R: UserRepository> {
    pub add: AddUser<R>,
    pub get_by_id: GetUserById<R>,
    pub update: UpdateUser<R>,
    pub delete: DeleteUser<R>,
}

impl<R: UserRepository> UserUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            add: AddUser::new(Arc::clone(&repository)),
            get_by_id: GetUserById::new(Arc::clone(&repository)),
            update: UpdateUser::new(Arc::clone(&repository)),
            delete: DeleteUser::new(repository),
        }
    }
}

impl<R: UserRepository> Clone for UserUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            add: self.add.clone(),
            get_by_id: self.get_by_id.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Meta};
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn input() -> NewUser {
        NewUser {
            name: "Katherine".to_string(),
            last_name: "Johnson".to_string(),
            gender: Gender::Female,
            meta: Meta::new(),
        }
    }

    #[tokio::test]
    async fn test_add_user_delegates_input_unchanged() {
        let mut mock = MockUserRepository::new();
        mock.expect_add()
            .withf(|new_user| *new_user == input())
            .times(1)
            .returning(|new_user| Ok(User::new(new_user)));

        let user = AddUser::new(Arc::new(mock)).execute(input()).await.unwrap();
        assert_eq!(user.name, "Katherine");
        assert_eq!(user.gender, Gender::Female);
    }

    #[tokio::test]
    async fn test_get_user_by_id_passes_id() {
        let id = Uuid::now_v7();
        let mut mock = MockUserRepository::new();
        mock.expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let found = GetUserById::new(Arc::new(mock)).execute(id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_user_returns_repository_result() {
        let user = User::new(input());
        let expected = user.clone();

        let mut mock = MockUserRepository::new();
        mock.expect_update()
            .withf(move |u| u.id == expected.id)
            .times(1)
            .returning(|u| Ok(Some(u)));

        let updated = UpdateUser::new(Arc::new(mock))
            .execute(user.clone())
            .await
            .unwrap();
        assert_eq!(updated, Some(user));
    }

    #[tokio::test]
    async fn test_delete_user_propagates_errors() {
        let mut mock = MockUserRepository::new();
        mock.expect_delete()
            .returning(|_| Err(crate::error::UserError::Database("down".to_string())));

        let result = DeleteUser::new(Arc::new(mock)).execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(crate::error::UserError::Database(_))));
    }
}
