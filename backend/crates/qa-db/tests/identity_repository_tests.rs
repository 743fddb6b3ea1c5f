mod common;

use common::{create_test_pool, test_identity};

use qa_db::{DbError, IdentityRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_valid_identity_when_created_then_can_be_found_by_email() {
    // Given: A test database
    let pool = create_test_pool().await;
    let identity = test_identity("alice", "a@x.com");
    let repo = IdentityRepository::new(pool.clone());

    // When: Creating the identity
    repo.create(&identity).await.unwrap();

    // Then: Finding by email returns the stored record
    let result = repo.find_by_email("a@x.com").await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(identity.id));
    assert_that!(found.username, eq(&identity.username));
    assert_that!(found.email, eq(&identity.email));
    assert_that!(found.password_hash, eq(&identity.password_hash));
}

#[tokio::test]
async fn given_empty_database_when_finding_unknown_email_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = IdentityRepository::new(pool);

    // When: Looking up an email that was never registered
    let result = repo.find_by_email("nobody@x.com").await.unwrap();

    // Then: No record is returned
    assert_that!(result, none());
}

#[tokio::test]
async fn given_stored_identity_when_finding_with_different_case_then_returns_none() {
    // Given: An identity stored with a lowercase email
    let pool = create_test_pool().await;
    let repo = IdentityRepository::new(pool);
    repo.create(&test_identity("alice", "a@x.com")).await.unwrap();

    // When: Looking up with different casing
    let result = repo.find_by_email("A@X.COM").await.unwrap();

    // Then: Lookup is exact-match, so nothing is found
    assert_that!(result, none());
}

#[tokio::test]
async fn given_stored_identity_when_inserting_same_email_then_unique_violation() {
    // Given: An identity already stored
    let pool = create_test_pool().await;
    let repo = IdentityRepository::new(pool);
    repo.create(&test_identity("alice", "a@x.com")).await.unwrap();

    // When: Inserting a second identity with the same email
    let result = repo.create(&test_identity("bob", "a@x.com")).await;

    // Then: The store rejects it atomically
    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));

    // And: The first record is untouched
    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_that!(found.username, eq("alice"));
}

#[tokio::test]
async fn given_two_identities_when_sharing_username_then_both_stored() {
    // Given: Usernames are not unique
    let pool = create_test_pool().await;
    let repo = IdentityRepository::new(pool);

    // When: Two accounts register with the same username
    repo.create(&test_identity("alice", "a@x.com")).await.unwrap();
    repo.create(&test_identity("alice", "b@y.com")).await.unwrap();

    // Then: Both records exist under their own email
    let a = repo.find_by_email("a@x.com").await.unwrap();
    let b = repo.find_by_email("b@y.com").await.unwrap();
    assert_that!(a, some(anything()));
    assert_that!(b, some(anything()));
}
