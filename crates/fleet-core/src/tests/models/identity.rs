use crate::Identity;

fn test_identity() -> Identity {
    Identity::new(
        "123-456-789".to_string(),
        "test@email.com".to_string(),
        "0544444444".to_string(),
        "$argon2id$stub".to_string(),
    )
}

#[test]
fn test_identity_new() {
    let identity = test_identity();

    assert_eq!(identity.car_id, "123-456-789");
    assert_eq!(identity.email, "test@email.com");
    assert_eq!(identity.phone_number, "0544444444");
    assert!(identity.is_active);
    assert!(!identity.is_staff);
    assert!(!identity.is_superuser);
    assert_eq!(identity.created_at, identity.updated_at);
}

#[test]
fn test_identity_with_privileges() {
    let identity = test_identity().with_privileges();

    assert!(identity.is_staff);
    assert!(identity.is_superuser);
    assert!(identity.is_active);
}

#[test]
fn test_identity_can_authenticate() {
    let mut identity = test_identity();
    assert!(identity.can_authenticate());

    identity.is_active = false;
    assert!(!identity.can_authenticate());
}
