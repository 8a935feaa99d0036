use crate::ServerConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

#[test]
fn given_default_server_config_when_validated_then_ok() {
    let config = ServerConfig::default();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_port_zero_when_validated_then_ok() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_privileged_port_when_validated_then_rejected() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };

    assert_that!(config.validate().is_err(), eq(true));
}
