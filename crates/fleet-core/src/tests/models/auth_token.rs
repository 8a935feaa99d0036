use crate::AuthToken;

use uuid::Uuid;

#[test]
fn test_auth_token_new() {
    let identity_id = Uuid::new_v4();
    let token = AuthToken::new("abc123".to_string(), identity_id);

    assert_eq!(token.key, "abc123");
    assert_eq!(token.identity_id, identity_id);
}
