use crate::{Identity, PublicUser};

#[test]
fn test_identity_new() {
    let identity = Identity::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    );

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email, "a@x.com");
    assert_eq!(identity.password_hash, "$2b$10$abcdefghijklmnopqrstuv");
}

#[test]
fn test_identity_new_assigns_unique_ids() {
    let a = Identity::new("u".to_string(), "a@x.com".to_string(), "h".to_string());
    let b = Identity::new("u".to_string(), "b@x.com".to_string(), "h".to_string());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_public_user_strips_password_hash() {
    let identity = Identity::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "$2b$10$abcdefghijklmnopqrstuv".to_string(),
    );

    let user = PublicUser::from(&identity);

    assert_eq!(user.id, identity.id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");

    // The serialized view must never contain the hash
    let json = serde_json::to_value(&user).unwrap();
    let fields: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["email", "id", "username"]);
}
