//! MongoUserRepository against a real MongoDB (requires Docker)

use domain_users::{Gender, Meta, MongoUserRepository, NewUser, UserRepository};
use test_utils::{TestDataBuilder, TestMongo};

fn input(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        last_name: "Mongo".to_string(),
        gender: Gender::Male,
        meta: Meta::new(),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_mongo_user_lifecycle() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("test_mongo_user_lifecycle");
    let repo = MongoUserRepository::new(&mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();

    let created = repo.add(input("Linus")).await.unwrap();
    let other = repo.add(input("Ken")).await.unwrap();
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created.clone()));

    let mut changed = created.clone();
    changed.name = "Dennis".to_string();
    let updated = repo.update(changed).await.unwrap().unwrap();
    assert_eq!(updated.name, "Dennis");
    assert!(updated.updated_at.is_some());

    let deleted = repo.delete(created.id).await.unwrap().unwrap();
    assert!(!deleted.lifecycle.is_active());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(repo.delete(created.id).await.unwrap().is_none());
    assert!(repo.update(updated).await.unwrap().is_none());

    assert!(repo.get_by_id(other.id).await.unwrap().is_some());
    assert!(repo.get_by_id(builder.user_id()).await.unwrap().is_none());
}
