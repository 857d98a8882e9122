//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::Lifecycle;
use database::mongodb::{bson_uuid, uuid_from_bson};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, Uuid as BsonUuid, doc, to_bson},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{Gender, Meta, NewUser, User};
use crate::repository::UserRepository;

/// Stored shape of a [`User`]: the id lives in `_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    name: String,
    last_name: String,
    gender: Gender,
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    lifecycle: Lifecycle,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: bson_uuid(user.id),
            name: user.name,
            last_name: user.last_name,
            gender: user.gender,
            meta: user.meta,
            updated_at: user.updated_at,
            lifecycle: user.lifecycle,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: uuid_from_bson(doc.id),
            name: doc.name,
            last_name: doc.last_name,
            gender: doc.gender,
            meta: doc.meta,
            updated_at: doc.updated_at,
            lifecycle: doc.lifecycle,
        }
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, "users")
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserDocument>(collection_name),
        }
    }

    pub async fn init_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "lifecycle.state": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_lifecycle_state".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("User indexes created successfully");
        Ok(())
    }

    /// Matches the live user with `id`
    fn live_filter(id: Uuid) -> Document {
        doc! {
            "_id": bson_uuid(id),
            "lifecycle.state": Lifecycle::ACTIVE_STATE,
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, input))]
    async fn add(&self, input: NewUser) -> UserResult<User> {
        let user = User::new(input);

        self.collection
            .insert_one(UserDocument::from(user.clone()))
            .await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::live_filter(id)).await?;
        Ok(user.map(User::from))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: User) -> UserResult<Option<User>> {
        let update = doc! {
            "$set": {
                "name": &user.name,
                "lastName": &user.last_name,
                "gender": to_bson(&user.gender)?,
                "meta": to_bson(&user.meta)?,
                "updatedAt": to_bson(&Utc::now())?,
            }
        };

        let updated = self
            .collection
            .find_one_and_update(Self::live_filter(user.id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(user_id = %user.id, "User updated");
        }
        Ok(updated.map(User::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<Option<User>> {
        let update = doc! {
            "$set": { "lifecycle": to_bson(&Lifecycle::deleted_now())? }
        };

        let deleted = self
            .collection
            .find_one_and_update(Self::live_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if deleted.is_some() {
            tracing::info!(user_id = %id, "User soft-deleted");
        }
        Ok(deleted.map(User::from))
    }
}
