use crate::AdminConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

fn full_admin() -> AdminConfig {
    AdminConfig {
        car_id: Some("000-000-001".to_string()),
        email: Some("admin@fleet.local".to_string()),
        phone_number: Some("0500000000".to_string()),
        password: Some("bootstrap".to_string()),
    }
}

#[test]
fn given_empty_admin_config_when_validated_then_ok_and_not_configured() {
    let config = AdminConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.is_configured(), eq(false));
}

#[test]
fn given_full_admin_config_when_validated_then_ok_and_configured() {
    let config = full_admin();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.is_configured(), eq(true));
}

#[test]
fn given_partial_admin_config_when_validated_then_rejected() {
    let config = AdminConfig {
        password: None,
        ..full_admin()
    };

    assert_that!(config.validate().is_err(), eq(true));
}
